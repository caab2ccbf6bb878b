use crate::domain::a001_laundry_transaction::ui::list::TransactionsListPage;
use crate::shared::notification::{NotificationHost, NotificationService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Error alerts raised anywhere below are rendered by NotificationHost
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <main class="app-main">
                <TransactionsListPage />
            </main>
            <NotificationHost />
        </ConfigProvider>
    }
}
