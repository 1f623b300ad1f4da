use anyhow::Result;
use bitpay_model::{
    hydrate, Currency, Element, Invoice, MinerFeesItem, ModelError, Payout, PayoutStatus,
    PayoutTransaction, UniversalCodes, WireRecord,
};
use serde_json::{json, Map, Value};

fn populated_payout() -> Payout {
    let mut payout = Payout::new(10.0, Currency::Usd, Currency::Gbp);
    payout.set_token("9pVLfvdjt59q1JiY2JEsf2uc7UWFcbRC");
    payout.set_effective_date("2021-05-27T09:00:00.000Z");
    payout.set_reference("payout_20210527");
    payout.set_notification_url("https://example.com/payout/ipn");
    payout.set_notification_email("merchant@email.com");
    payout.set_redirect_url("https://example.com/redirect");
    payout.set_account("SJcWZCFq344DL8QnXpdBNM");
    payout.set_email("john@doe.com");
    payout.set_recipient_id("LDxRZCGq174SF8AnQpdBPB");
    payout.set_shopper_id("7qohDf2zZnQK5Qanj8oyC2");
    payout.set_label("John Doe");
    payout.set_support_phone("1-888-700-0444");
    payout.set_message("Thank you for your business");
    payout.set_percent_fee(1.5);
    payout.set_fee(1.01);
    payout.set_deposit_total(11.01);
    payout.set_rate(39390.47);
    payout.set_btc(0.00025);
    payout.set_date_executed("2021-05-27T10:00:00.000Z");
    payout.set_id("JMwv8wQCXANoU2ZZQ9a9GH");
    payout.set_status_kind(PayoutStatus::Complete);
    payout.set_request_date("2021-05-27T10:47:37.834Z");

    let mut rates = Map::new();
    rates.insert("BTC".to_string(), json!({"USD": 39390.47, "GBP": 27883.962246420004}));
    payout.set_exchange_rates(rates);

    let mut tx = PayoutTransaction::new();
    tx.set_txid("db53d7e2bf3385a31257ce09396202d9c2823370a5ca186db315c45e24594057");
    tx.set_amount(0.000254);
    tx.set_date("2021-05-27T11:04:23.155Z");
    payout.add_transaction(tx);

    payout
}

/// 完整 payout 投影後再還原，所有非空欄位保持一致
#[test]
fn test_payout_round_trip() -> Result<()> {
    let original = populated_payout();
    let wire = original.to_wire();
    assert_eq!(wire.len(), Payout::fields().len());

    let restored: Payout = hydrate(&wire)?;
    assert_eq!(restored, original);
    assert_eq!(restored.to_wire(), wire);
    assert_eq!(restored.status_kind(), Some(PayoutStatus::Complete));
    Ok(())
}

#[test]
fn test_payout_round_trip_through_json_text() -> Result<()> {
    let original = populated_payout();
    let json = original.to_json()?;
    assert!(json.contains(r#""notificationURL":"https://example.com/payout/ipn""#));

    let restored = Payout::from_json(&json)?;
    assert_eq!(restored, original);
    Ok(())
}

#[test]
fn test_invoice_round_trip_with_nested_records() -> Result<()> {
    let mut original = Invoice::new(25.5, Currency::Usd);
    original.set_order_id("order-42");
    original.set_item_desc("Coffee");
    original.set_notification_url("https://example.com/ipn");
    original.set_redirect_url("https://example.com/done");
    original.set_full_notifications(true);
    original.set_acceptance_window(1_200_000);
    original.set_payment_currencies(&[Currency::Btc, Currency::Bch]);
    original.set_invoice_time(1_620_734_545_366);
    original.shopper_mut().set_user("shopper-1");

    let mut codes = UniversalCodes::new();
    codes.set_payment_string("bitcoin:?r=https://bitpay.com/i/KSF8d4D5cq");
    original.set_universal_codes(codes);

    let mut btc = MinerFeesItem::new();
    btc.set_satoshis_per_byte(15.0);
    btc.set_total_fee(3320);
    btc.set_fiat_amount(1.95);
    original.miner_fees_mut().set_btc(btc);

    let wire = original.to_wire();
    assert_eq!(
        wire.get("universalCodes"),
        Some(&json!({"paymentString": "bitcoin:?r=https://bitpay.com/i/KSF8d4D5cq"}))
    );

    let restored = Invoice::from_wire(&wire)?;
    assert_eq!(restored, original);
    Ok(())
}

#[test]
fn test_raw_transaction_elements_survive_round_trip() -> Result<()> {
    let wire = json!({
        "transactions": [
            {"txid": "abc", "amount": 1.0},
            "pending",
            42
        ]
    });
    let map = wire.as_object().cloned().unwrap_or_default();

    let payout = Payout::from_wire(&map)?;
    assert_eq!(payout.transactions().len(), 3);
    assert!(matches!(payout.transactions()[0], Element::Record(_)));
    assert_eq!(payout.transactions()[1], Element::Raw(json!("pending")));

    assert_eq!(Value::Object(payout.to_wire()), wire);
    Ok(())
}

/// 交易物件帶有未知欄位時，原樣保留並重新投影
#[test]
fn test_transaction_with_extra_keys_round_trips() -> Result<()> {
    let wire = json!({
        "transactions": [
            {"txid": "a", "amount": 1.0, "confirmations": 6},
            {"txid": "b", "amount": 2.0}
        ]
    });
    let map = wire.as_object().cloned().unwrap_or_default();

    let payout = Payout::from_wire(&map)?;
    assert!(matches!(payout.transactions()[0], Element::Raw(_)));
    assert!(matches!(payout.transactions()[1], Element::Record(_)));

    assert_eq!(Value::Object(payout.to_wire()), wire);
    Ok(())
}

#[test]
fn test_hydration_uses_wire_names_only()-> Result<()> {
    let map = json!({"notificationUrl": "https://ignored.example.com", "label": "x"})
        .as_object()
        .cloned()
        .unwrap_or_default();

    let payout = Payout::from_wire(&map)?;
    assert_eq!(payout.notification_url(), None);
    assert_eq!(payout.label(), Some("x"));
    Ok(())
}

#[test]
fn test_hydration_rejects_unknown_currency() {
    let err = Payout::from_json(r#"{"amount": 1, "currency": "ZZZ"}"#).unwrap_err();
    match err {
        ModelError::Field { field, source } => {
            assert_eq!(field, "currency");
            assert!(matches!(*source, ModelError::InvalidCurrency { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_hydration_checks_field_shape() {
    let err = Invoice::from_json(r#"{"shopper": "someone"}"#).unwrap_err();
    assert!(matches!(err, ModelError::Field { ref field, .. } if field == "shopper"));

    let err = Payout::from_json(r#"{"transactions": {}}"#).unwrap_err();
    assert!(matches!(err, ModelError::Field { ref field, .. } if field == "transactions"));

    let err = Invoice::from_json(r#"{"exchangeRates": []}"#).unwrap_err();
    assert!(matches!(err, ModelError::Field { ref field, .. } if field == "exchangeRates"));
}

#[test]
fn test_null_wire_values_leave_defaults() -> Result<()> {
    let payout = Payout::from_json(r#"{"amount": null, "status": null, "transactions": null}"#)?;
    assert_eq!(payout, Payout::default());
    Ok(())
}
