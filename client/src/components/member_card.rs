//! Card for a single team member.
//!
//! DESIGN
//! ======
//! Two layouts share one card. On desktop the portrait is 3:4 and social
//! links slide up over it on hover; on mobile the portrait is square, the bio
//! is hidden and links sit in a footer row. A link only renders when its URL
//! is set to something non-blank.

#[cfg(test)]
#[path = "member_card_test.rs"]
mod member_card_test;

use leptos::prelude::*;

use crate::components::social_icon::{ICON_SIZE_SMALL, SocialIcon, SocialKind};
use crate::net::types::Member;

/// Social links to render for `member`, LinkedIn first.
fn social_links(member: &Member) -> Vec<(SocialKind, String)> {
    [(SocialKind::LinkedIn, member.linkedin_link()), (SocialKind::GitHub, member.github_link())]
        .into_iter()
        .filter_map(|(kind, href)| href.map(|h| (kind, h.to_owned())))
        .collect()
}

#[component]
pub fn MemberCard(member: Member) -> impl IntoView {
    let links = social_links(&member);
    let overlay_links = links.clone();

    view! {
        <div class="member-card group flex flex-col bg-[#1a1033] rounded-xl overflow-hidden border border-white/5 hover:border-white/20 transition-colors duration-300">
            <div class="member-card__portrait relative w-full aspect-square md:aspect-[3/4] overflow-hidden bg-gray-900/50">
                <img
                    src=member.profile_image_url
                    alt=member.name.clone()
                    class="w-full h-full object-cover object-top transition-transform duration-700 group-hover:scale-105"
                    loading="lazy"
                />
                <div class="member-card__overlay hidden md:flex absolute inset-0 bg-black/40 opacity-0 group-hover:opacity-100 transition-opacity duration-300 items-end justify-center pb-6 gap-3">
                    {overlay_links
                        .into_iter()
                        .map(|(kind, href)| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=kind.label()
                                    class="p-2 bg-white/10 backdrop-blur-md rounded-full hover:bg-white hover:text-black text-white transition-colors border border-white/20 translate-y-4 group-hover:translate-y-0 duration-300"
                                >
                                    <SocialIcon kind=kind/>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="member-card__body p-3 md:p-5 flex flex-col flex-grow text-center">
                <h3 class="text-sm md:text-lg font-bold text-white leading-tight mb-1">{member.name}</h3>
                <p class="text-[10px] md:text-xs font-semibold text-purple-400 uppercase tracking-wider mb-2 md:mb-3">
                    {member.role}
                </p>
                <p class="hidden md:block text-xs md:text-sm text-gray-400 leading-relaxed line-clamp-3 mb-4">
                    {member.bio}
                </p>
                <div class="member-card__links flex md:hidden justify-center gap-3 mt-auto pt-2 border-t border-white/5">
                    {links
                        .into_iter()
                        .map(|(kind, href)| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=kind.label()
                                    class="text-gray-400 hover:text-white"
                                >
                                    <SocialIcon kind=kind size=ICON_SIZE_SMALL/>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
