//! Dashboard chrome: category tabs, the avatar menu, and the selected section.

use leptos::prelude::*;

use crate::state::dashboard::DashboardCategory;
use crate::state::session::use_session;

/// Avatar label when nobody is signed in or the record has no name.
const GUEST_NAME: &str = "Guest";

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let category = RwSignal::new(DashboardCategory::default());
    let menu_open = RwSignal::new(false);

    let display_name = Signal::derive(move || {
        state.with(|state| {
            state
                .user
                .as_ref()
                .and_then(|user| user.display_name())
                .unwrap_or(GUEST_NAME)
                .to_owned()
        })
    });

    let on_logout = move |_| {
        menu_open.set(false);
        session.logout();
    };

    view! {
        <div class="relative z-10 box-border h-[80%] min-h-[800px] w-[80%] overflow-y-auto overflow-x-hidden rounded-lg border-2 border-[#2c2a2a] bg-[#191919] max-[410px]:w-full">
            <nav class="flex w-full flex-row items-center justify-between border-b-2 border-b-[#2c2a2a]">
                <div class="flex flex-row gap-[5px]">
                    <h1 class="cursor-pointer border-r-2 border-r-[#2c2a2a] pr-[10px] text-xl">
                        "Dashboard"
                    </h1>
                    <ul class="flex flex-row items-center justify-start gap-[10px] max-[768px]:hidden">
                        {DashboardCategory::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <li
                                        class="cursor-pointer text-md"
                                        class:underline=move || category.get() == tab
                                        on:click=move |_| category.set(tab)
                                    >
                                        {tab.tab_label()}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div class="relative">
                    <button
                        class="h-10 w-10 rounded-full bg-slate-600 text-xs text-white"
                        title=move || display_name.get()
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || initials(&display_name.get())}
                    </button>
                    <Show when=move || menu_open.get()>
                        <ul class="absolute right-0 z-20 mt-2 w-40 rounded-md bg-[#252525] py-1 text-sm text-white shadow-lg">
                            <li class="px-3 py-1 font-semibold">{move || display_name.get()}</li>
                            <li class="border-t border-[#2c2a2a]"></li>
                            <li class="cursor-pointer px-3 py-1 hover:bg-[#2c2a2a]">"Profile"</li>
                            <li class="cursor-pointer px-3 py-1 hover:bg-[#2c2a2a]" on:click=on_logout.clone()>
                                "Log out"
                            </li>
                        </ul>
                    </Show>
                </div>
            </nav>
            <div class="flex w-full flex-col items-start justify-start gap-[25px] p-[15px] text-white">
                <h1 class="cursor-pointer text-2xl font-bold transition duration-300 ease hover:opacity-80">
                    {move || category.get().heading()}
                </h1>
            </div>
        </div>
    }
}

/// Up to two leading letters for the avatar button.
fn initials(name: &str) -> String {
    name.chars().filter(|c| c.is_alphanumeric()).take(2).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn initials_take_two_letters() {
        assert_eq!(initials("gonzu"), "GO");
        assert_eq!(initials("x"), "X");
        assert_eq!(initials("  a.b "), "AB");
        assert_eq!(initials(""), "");
    }
}
