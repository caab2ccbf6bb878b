use contracts::domain::a001_laundry_transaction::Transaction;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// "Rp." prefix used everywhere a price is shown
pub fn format_price(transaction: &Transaction) -> String {
    format!("Rp.{}", transaction.total_price)
}

/// Receipt preview for the selected transaction
#[component]
pub fn ReceiptPanel(transaction: Transaction, on_close: Callback<()>) -> impl IntoView {
    let price = format_price(&transaction);
    let receipt_id = transaction.id.to_string();
    let lines = vec![
        ("ID", transaction.id.to_string()),
        ("Nama Pelanggan", transaction.customer_name),
        ("No Telepon", transaction.phone_number),
        ("Layanan", transaction.service_name),
        ("Total Harga", price),
        ("Tanggal", transaction.created_at),
    ];

    view! {
        <div class="receipt" data-receipt-id=receipt_id>
            <div class="receipt__header">
                {icon("receipt")}
                <h2 class="receipt__title">"Struk Transaksi"</h2>
            </div>
            <dl class="receipt__lines">
                {lines
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="receipt__line">
                                <dt class="receipt__label">{label}</dt>
                                <dd class="receipt__value">{value}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
            </dl>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_close.run(())
                attr:class="receipt__close"
            >
                "Tutup"
            </Button>
        </div>
    }
}
