mod state;

use contracts::domain::a001_laundry_transaction::Transaction;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::window;

use crate::domain::a001_laundry_transaction::api::{self, TransactionsError};
use crate::domain::a001_laundry_transaction::ui::receipt::{format_price, ReceiptPanel};
use crate::shared::icons::icon;
use crate::shared::notification::use_notifications;
use crate::system::auth::guard::redirect_if_signed_out;
use crate::system::auth::storage::BrowserSessionStorage;
pub use state::{create_state, ListEvent, TransactionsListState};

const PAGE_ID: &str = "a001_laundry_transaction--list";
const TABLE_ID: &str = "laundry-transactions-table";
const COLUMN_COUNT: &str = "8";

/// Admin page listing completed laundry transactions
#[component]
pub fn TransactionsListPage() -> impl IntoView {
    let state = create_state();
    let notifications = use_notifications();
    let (loading, set_loading) = signal(false);
    let (session_name, set_session_name) = signal::<Option<String>>(None);

    let dispatch = move |event: ListEvent| state.update(|s| s.apply(event));

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_transactions().await {
                Ok(records) => {
                    log::info!("Received {} transactions", records.len());
                    dispatch(ListEvent::Loaded(records));
                    log::debug!(
                        "{} completed transactions kept",
                        state.with_untracked(|s| s.items.len())
                    );
                }
                Err(e) => {
                    match &e {
                        TransactionsError::Api { .. } => log::warn!("Transactions API error: {}", e),
                        _ => log::error!("Failed to load transactions: {}", e),
                    }
                    notifications.error("Error", e.user_message());
                    dispatch(ListEvent::LoadFailed);
                }
            }
            set_loading.set(false);
        });
    };

    // One fetch per mount; the session check runs alongside and never waits on it
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
        let user = redirect_if_signed_out(&BrowserSessionStorage::from_config());
        set_session_name.set(user.and_then(|u| u.display_name().map(str::to_string)));
    });

    let search_signal = RwSignal::new(String::new());
    Effect::new(move |_| {
        let query = search_signal.get();
        dispatch(ListEvent::Search(query));
    });

    let go_back = move |_: leptos::ev::MouseEvent| {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    };

    let on_select = Callback::new(move |t: Transaction| dispatch(ListEvent::Select(t)));
    let on_dismiss = Callback::new(move |_: ()| dispatch(ListEvent::Dismiss));

    view! {
        <div id=PAGE_ID class="page" data-page-category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Daftar Transaksi"</h1>
                    <Badge>
                        {move || state.with(|s| s.items.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    {move || session_name.get().map(|name| view! {
                        <span class="page__user">{icon("user")}" "{name}</span>
                    })}
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        {icon("search")}
                        <div style="flex: 1; max-width: 420px;">
                            <Input
                                value=search_signal
                                placeholder="Cari berdasarkan nama pelanggan atau ID..."
                            />
                        </div>
                        {move || loading.get().then(|| view! {
                            <span class="filter-panel__status">"Memuat..."</span>
                        })}
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:id=TABLE_ID attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"ID"</TableHeaderCell>
                                <TableHeaderCell>"Nama Pelanggan"</TableHeaderCell>
                                <TableHeaderCell>"No Telepon"</TableHeaderCell>
                                <TableHeaderCell>"Layanan"</TableHeaderCell>
                                <TableHeaderCell>"Total Harga (Rp)"</TableHeaderCell>
                                <TableHeaderCell>"Tanggal"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Struk"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = state.with(|s| s.page_items());
                                if rows.is_empty() {
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan=COLUMN_COUNT>
                                                <div class="table__empty">
                                                    "Tidak ada data transaksi yang sesuai."
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|t| view! { <TransactionRow transaction=t on_select=on_select /> })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </TableBody>
                    </Table>
                </div>

                <div class="page__footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=go_back>
                        {icon("arrow-left")}
                        " Kembali"
                    </Button>
                    <div class="pagination-controls">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| dispatch(ListEvent::PagePrev)
                            disabled=Signal::derive(move || !state.with(|s| s.can_go_prev()))
                        >
                            {icon("chevron-left")}
                            " Previous"
                        </Button>
                        <span class="pagination-info">
                            {move || format!("Halaman {}", state.with(|s| s.page))}
                        </span>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| dispatch(ListEvent::PageNext)
                            disabled=Signal::derive(move || !state.with(|s| s.can_go_next()))
                        >
                            "Next "
                            {icon("chevron-right")}
                        </Button>
                    </div>
                </div>

                {move || state.with(|s| s.selected.clone()).map(|transaction| view! {
                    <ReceiptPanel transaction=transaction on_close=on_dismiss />
                })}
            </div>
        </div>
    }
}

#[component]
fn TransactionRow(transaction: Transaction, on_select: Callback<Transaction>) -> impl IntoView {
    let id = transaction.id.to_string();
    let customer_name = transaction.customer_name.clone();
    let phone_number = transaction.phone_number.clone();
    let service_name = transaction.service_name.clone();
    let price = format_price(&transaction);
    let created_at = transaction.created_at.clone();
    let status = transaction.status.to_string();

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>{id}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <span style="font-weight: 500;">{customer_name}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{phone_number}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{service_name}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{price}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{created_at}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <span class="badge badge--success">{status}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_select.run(transaction.clone())
                    attr:title="Cetak struk"
                >
                    {icon("printer")}
                    " Cetak"
                </Button>
            </TableCell>
        </TableRow>
    }
}
