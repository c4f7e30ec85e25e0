//! Landing-page FAQ accordion. Any number of entries may be open at once.

use leptos::prelude::*;

/// Question/answer pairs in display order.
pub const FAQ_ENTRIES: [(&str, &str); 4] = [
    (
        "Does it have inbuilt exercises?",
        "Yes it does! It has over 50+ exercises that you can choose!",
    ),
    (
        "Can I create my own exercises?",
        "You can easily add your own exercise that would only be seen by you on your dashboard page.",
    ),
    (
        "Can I Track Performance for a Specific Lift?",
        "Absolutely! Navigate to the dashboard and select the specific lift you wish to examine performance metrics for.",
    ),
    (
        "Why should I use this?",
        "Completely free and user-friendly! This page caters to gym enthusiasts seeking enhanced performance. Effortlessly track your progress and elevate your workout experience!",
    ),
];

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <div class="text-white">
            {FAQ_ENTRIES
                .iter()
                .map(|(question, answer)| {
                    view! {
                        <details class="border-b border-[#2c2a2a] py-4">
                            <summary class="cursor-pointer text-start font-medium">{*question}</summary>
                            <p class="pt-2 text-sm">{*answer}</p>
                        </details>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
