//! Integration tests for the end-to-end checkout flow.
//!
//! Exercises the full path a session takes: build a cart, select a
//! delivery address, apply a promo code, place the order, verify the OTP.
//! Simulated delays are collapsed to zero so the tests run instantly.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use quickbite_core::{AddressId, OrderStatus, PaymentMethod, Price};
use quickbite_integration_tests::TestContext;
use quickbite_storefront::checkout::{
    CheckoutError, apply_promo, place_order, verify_otp,
};

#[tokio::test]
async fn full_checkout_with_promo_and_otp() {
    let ctx = TestContext::new();
    ctx.cart.add_item(ctx.plain_line("1", 0, 2)); // ₹598 subtotal
    ctx.user
        .set_selected_address(Some(AddressId::new("1")))
        .unwrap();

    let promo = apply_promo("WELCOME50").unwrap();
    let order = place_order(
        &ctx.cart,
        &ctx.user,
        &ctx.catalog,
        PaymentMethod::Upi,
        Some(&promo),
        Duration::ZERO,
    )
    .await
    .unwrap();

    // ₹598 + ₹0 delivery + ₹30 tax - ₹100 capped discount.
    assert_eq!(order.totals.subtotal, Price::new(598));
    assert_eq!(order.totals.delivery_fee, Price::ZERO);
    assert_eq!(order.totals.taxes, Price::new(30));
    assert_eq!(order.totals.discount, Price::new(100));
    assert_eq!(order.totals.total, Price::new(528));
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.address.id, AddressId::new("1"));

    // The cart is consumed by the order.
    assert_eq!(ctx.cart.total_items(), 0);

    verify_otp("123456", Duration::ZERO).await.unwrap();
}

#[tokio::test]
async fn small_order_pays_delivery_fee() {
    let ctx = TestContext::new();
    ctx.cart.add_item(ctx.plain_line("3", 1, 1)); // Idli Sambar, ₹99
    ctx.user
        .set_selected_address(Some(AddressId::new("2")))
        .unwrap();

    let order = place_order(
        &ctx.cart,
        &ctx.user,
        &ctx.catalog,
        PaymentMethod::CashOnDelivery,
        None,
        Duration::ZERO,
    )
    .await
    .unwrap();

    assert_eq!(order.totals.subtotal, Price::new(99));
    assert_eq!(order.totals.delivery_fee, Price::new(49));
    // 5% of 99 rounds 4.95 -> 5.
    assert_eq!(order.totals.taxes, Price::new(5));
    assert_eq!(order.totals.total, Price::new(153));
}

#[tokio::test]
async fn validation_failures_leave_state_untouched() {
    let ctx = TestContext::new();

    // Empty cart blocks even with an address selected.
    ctx.user
        .set_selected_address(Some(AddressId::new("1")))
        .unwrap();
    let result = place_order(
        &ctx.cart,
        &ctx.user,
        &ctx.catalog,
        PaymentMethod::Card,
        None,
        Duration::ZERO,
    )
    .await;
    assert!(matches!(result, Err(CheckoutError::EmptyCart)));

    // Missing address blocks and the cart keeps its contents.
    ctx.user.set_selected_address(None).unwrap();
    ctx.cart.add_item(ctx.plain_line("1", 0, 1));
    let result = place_order(
        &ctx.cart,
        &ctx.user,
        &ctx.catalog,
        PaymentMethod::Card,
        None,
        Duration::ZERO,
    )
    .await;
    assert!(matches!(result, Err(CheckoutError::NoAddressSelected)));
    assert_eq!(ctx.cart.total_items(), 1);

    // An unknown promo code is rejected up front.
    assert!(matches!(
        apply_promo("FESTIVE75"),
        Err(CheckoutError::InvalidPromoCode(_))
    ));
}
