use crate::state::auth::use_auth;
use leptos::*;

const PRIMARY_LINK: &str = "w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover";
const SECONDARY_LINK: &str = "w-full flex items-center justify-center px-8 py-3 border border-border text-base font-medium rounded-md text-fg hover:bg-action-ghost-bg-hover";

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let signed_in = move || auth.get().is_authenticated;
    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Staffdesk"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Attendance and leave for small teams"
                    </p>
                    <div class="mt-5 max-w-md mx-auto flex gap-3 justify-center lg:mt-8">
                        <Show
                            when=signed_in
                            fallback=|| view! {
                                <a href="/login" class=PRIMARY_LINK>"Sign in"</a>
                                <a href="/register" class=SECONDARY_LINK>"Register"</a>
                            }
                        >
                            <a href="/dashboard" class=PRIMARY_LINK>"Open dashboard"</a>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
