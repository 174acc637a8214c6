use std::sync::Arc;

use serde_json::json;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use storefront_plugin::domain::attribute::{Attribute, AttributeType};
use storefront_plugin::domain::order::{
    Address, CheckoutEvent, Order, OrderToken, ShippingAddressOrder, ShippingAddressOrderHandler,
};
use storefront_plugin::filter::AttributeFilter;
use storefront_plugin::messaging::{CheckoutEventSubscriber, InProcessDispatcher};
use storefront_plugin::persistence::InMemoryOrderStore;
use storefront_plugin::query::{AssociationJoins, QueryBuilder, SequentialNameGenerator};
use storefront_plugin::resolver::{
    CheckoutAddressStateResolver, InMemoryAttributeCatalog, InMemoryCustomerDirectory,
};

/// Demo subscriber: announces every checkout event it sees.
struct LogSubscriber;

#[async_trait::async_trait]
impl CheckoutEventSubscriber for LogSubscriber {
    async fn on_event(&self, event: &CheckoutEvent) -> anyhow::Result<()> {
        tracing::info!(
            event_name = %event.name,
            order_id = %event.order.id,
            "Checkout event received"
        );
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,storefront_plugin=debug")),
        )
        .init();

    tracing::info!("🚀 Starting Storefront Plugin Demo");

    // === 1. Seed the in-memory platform ===
    let orders = Arc::new(InMemoryOrderStore::new());
    orders.put(Order::cart(OrderToken::new("T1"))).await;

    let catalog = Arc::new(InMemoryAttributeCatalog::new());
    let size_iri = catalog.register(Attribute::new(
        "display_size",
        "Display size",
        AttributeType::Integer,
    ));
    let sale_iri = catalog.register(Attribute::new("on_sale", "On sale", AttributeType::Checkbox));
    let released_iri = catalog.register(Attribute::new(
        "released_on",
        "Released on",
        AttributeType::Date,
    ));

    // === 2. Wire the checkout command handler ===
    let dispatcher = Arc::new(InProcessDispatcher::new());
    dispatcher.subscribe(Arc::new(LogSubscriber)).await;

    let handler = ShippingAddressOrderHandler::new(
        orders.clone(),
        Arc::new(InMemoryCustomerDirectory::new()),
        Arc::new(CheckoutAddressStateResolver::new()),
        orders.clone(),
        dispatcher,
    );

    // === 3. Address the cart ===
    let command = ShippingAddressOrder::new(OrderToken::new("T1"))
        .with_email("ada@example.com")
        .with_shipping_address(
            Address::new("Ada", "Lovelace", "12 Analytical Way", "London", "E1 6AN", "GB")
                .with_phone_number("+44 20 7946 0000"),
        );

    let order = handler.handle(command).await?;
    tracing::info!(
        order_id = %order.id,
        checkout_state = ?order.checkout_state,
        customer = ?order.customer.as_ref().map(|c| c.email.as_str()),
        "✅ Cart addressed"
    );

    // An unknown token is a hard failure, not a silent skip
    if let Err(error) = handler
        .handle(ShippingAddressOrder::new(OrderToken::new("missing")))
        .await
    {
        tracing::warn!(%error, "Expected failure for an unknown token");
    }

    // === 4. Build a filtered product query ===
    let filter = AttributeFilter::new(
        catalog,
        Arc::new(AssociationJoins::new(["attributes"])),
        ["attributes", "numeric", "flag", "released"],
    );

    let mut query = QueryBuilder::new("o");
    let names = SequentialNameGenerator::new();

    filter
        .apply_filter(
            "attributes",
            &json!({ "attribute_id": size_iri, "value": "27" }),
            &mut query,
            &names,
        )
        .await?;
    filter
        .apply_filter(
            "flag",
            &json!({ "attribute_id": sale_iri, "value": "true" }),
            &mut query,
            &names,
        )
        .await?;
    filter
        .apply_filter(
            "released",
            &json!({ "attribute_id": released_iri, "value": "2024-03-01" }),
            &mut query,
            &names,
        )
        .await?;

    // A malformed request never reaches the query, it is only logged
    filter
        .apply_filter(
            "numeric",
            &json!({ "attribute_id": size_iri }),
            &mut query,
            &names,
        )
        .await?;

    tracing::info!("✅ Query built: {}", query.to_sql());
    for (name, value) in query.parameters() {
        tracing::info!(parameter = %name, value = %value, "Bound parameter");
    }

    tracing::info!("🎉 Demo complete!");

    Ok(())
}
