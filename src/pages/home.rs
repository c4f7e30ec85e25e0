//! Landing page: hero copy, FAQ, and a preview of the dashboard.

use leptos::prelude::*;

use crate::components::dashboard_panel::DashboardPanel;
use crate::components::faq::Faq;
use crate::state::session::SessionState;
use crate::util::navigation::Page;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let signed_in = move || session.with(|state| state.user.is_some());

    view! {
        <div class="relative flex flex-col items-center gap-[50px] px-[5%] py-[50px]">
            <ul class="box-border flex w-full flex-row gap-[50px] max-[1280px]:flex-col">
                <li class="w-1/2 max-[1280px]:w-full">
                    <ul class="mt-[15px] flex w-full flex-col items-start gap-[25px]">
                        <li class="text-[42px] text-white">
                            "Supercharge Fitness Goals: Plan & Track Effortlessly!"
                        </li>
                        <li class="text-[18px] text-white">
                            "Empower your fitness journey! Plan custom workouts and effortlessly track progress. "
                            "Our website simplifies goal-driven fitness by allowing you to create your own custom "
                            "workout plans, and keep track of the progress you've made on the workouts!"
                        </li>
                        <li>
                            {move || {
                                if signed_in() {
                                    view! {
                                        <a class="rounded-lg bg-white px-5 py-2.5 text-black" href=Page::Dashboard.path()>
                                            "Open dashboard"
                                        </a>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <a class="rounded-lg bg-white px-5 py-2.5 text-black" href=Page::Register.path()>
                                            "Get started"
                                        </a>
                                    }
                                        .into_any()
                                }
                            }}
                        </li>
                    </ul>
                </li>
                <li class="w-1/2 max-[1280px]:w-full">
                    <Faq/>
                </li>
            </ul>

            <DashboardPanel/>
        </div>
    }
}
