//! A titled grid of member cards for one team section.

#[cfg(test)]
#[path = "category_section_test.rs"]
mod category_section_test;

use leptos::prelude::*;

use crate::components::member_card::MemberCard;
use crate::net::types::Member;
use crate::util::categorize::Category;

/// Pair each member with its list key, in section order.
fn keyed_members(members: Vec<Member>) -> Vec<(String, Member)> {
    members
        .into_iter()
        .enumerate()
        .map(|(index, member)| (member.key(index), member))
        .collect()
}

#[component]
pub fn CategorySection(category: Category) -> impl IntoView {
    let entries = keyed_members(category.members);

    view! {
        <section class="team-section mb-16 md:mb-24 last:mb-0" data-category=category.key.as_str()>
            <div class="flex items-center gap-4 mb-6 md:mb-10 px-2">
                <h2 class="text-xl md:text-3xl font-bold text-white whitespace-nowrap">{category.title}</h2>
                <div class="h-[1px] w-full bg-white/10 rounded-full"></div>
            </div>
            <div class="member-grid grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-3 md:gap-8">
                <For each=move || entries.clone() key=|(key, _)| key.clone() let:entry>
                    {
                        let (key, member) = entry;
                        view! {
                            <div class="member-grid__item" data-member-key=key>
                                <MemberCard member=member/>
                            </div>
                        }
                    }
                </For>
            </div>
        </section>
    }
}
