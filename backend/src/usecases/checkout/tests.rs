use super::*;
use chrono::Utc;
use crates::domain::{
    entities::{
        leads::LeadEntity, packages::PackageEntity, payment_trackings::PaymentTrackingEntity,
    },
    repositories::{
        coupons::MockCouponRepository, leads::MockLeadRepository,
        packages::MockPackageRepository, payment_trackings::MockPaymentTrackingRepository,
    },
    value_objects::{coupons::CouponModel, enums::discount_types::DiscountType},
};
use mockall::predicate::{always, eq};

type TestCheckout = CheckoutUseCase<
    MockPackageRepository,
    MockCouponRepository,
    MockLeadRepository,
    MockPaymentTrackingRepository,
    MockPaymentGateway,
>;

fn package(package_id: Uuid) -> PackageEntity {
    PackageEntity {
        id: package_id,
        name: "Clarity".to_string(),
        description: "Guided sessions".to_string(),
        price: 15000,
        duration: "6 weeks".to_string(),
        features: vec![],
        is_popular: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn package_repo(package_id: Uuid) -> MockPackageRepository {
    let mut package_repo = MockPackageRepository::new();
    package_repo
        .expect_find_by_id()
        .with(eq(package_id))
        .returning(|package_id| Box::pin(async move { Ok(Some(package(package_id))) }));
    package_repo
}

fn save10_coupon_repo() -> MockCouponRepository {
    let mut coupon_repo = MockCouponRepository::new();
    coupon_repo.expect_find_active_by_code().returning(|code| {
        Box::pin(async move {
            Ok((code == "SAVE10").then(|| CouponModel {
                code,
                discount_type: DiscountType::Percentage,
                discount_amount: 10.0,
                expiry_date: None,
                is_active: true,
            }))
        })
    });
    coupon_repo
}

fn record_from(payment: InsertPaymentTrackingEntity, payment_id: Uuid) -> PaymentTrackingEntity {
    PaymentTrackingEntity {
        id: payment_id,
        customer_name: payment.customer_name,
        customer_email: payment.customer_email,
        customer_phone: payment.customer_phone,
        package_id: payment.package_id,
        package_name: payment.package_name,
        amount: payment.amount,
        coupon_code: payment.coupon_code,
        channel: payment.channel,
        status: payment.status,
        gateway_order_id: payment.gateway_order_id,
        gateway_payment_id: payment.gateway_payment_id,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn pending_record(payment_id: Uuid, channel: PaymentChannel) -> PaymentTrackingEntity {
    record_from(
        InsertPaymentTrackingEntity {
            customer_name: "Asha".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_phone: "9876543210".to_string(),
            package_id: Uuid::new_v4().to_string(),
            package_name: "Clarity".to_string(),
            amount: 13500,
            coupon_code: Some("SAVE10".to_string()),
            channel: channel.to_string(),
            status: PaymentStatus::Pending.to_string(),
            gateway_order_id: Some("order_123".to_string()),
            gateway_payment_id: None,
        },
        payment_id,
    )
}

fn accepting_lead_repo() -> MockLeadRepository {
    let mut lead_repo = MockLeadRepository::new();
    lead_repo.expect_insert().returning(|lead| {
        Box::pin(async move {
            Ok(LeadEntity {
                id: Uuid::new_v4(),
                name: lead.name,
                email: lead.email,
                phone: lead.phone,
                message: lead.message,
                source: lead.source,
                created_at: Utc::now(),
            })
        })
    });
    lead_repo
}

fn checkout_model(package_id: Uuid, channel: PaymentChannel) -> StartCheckoutModel {
    StartCheckoutModel {
        name: "Asha".to_string(),
        email: "Asha@Example.com".to_string(),
        phone: "9876543210".to_string(),
        message: None,
        package_id,
        coupon_code: Some("save10".to_string()),
        channel,
    }
}

fn usecase(
    package_repo: MockPackageRepository,
    coupon_repo: MockCouponRepository,
    lead_repo: MockLeadRepository,
    payment_repo: MockPaymentTrackingRepository,
    gateway: MockPaymentGateway,
) -> TestCheckout {
    CheckoutUseCase::new(
        Arc::new(CouponUseCase::new(
            Arc::new(package_repo),
            Arc::new(coupon_repo),
        )),
        Arc::new(lead_repo),
        Arc::new(payment_repo),
        Arc::new(gateway),
        UpiPayee {
            vpa: "healing.coach@okaxis".to_string(),
            payee_name: "Healing Coach".to_string(),
        },
    )
}

#[tokio::test]
async fn manual_upi_checkout_survives_lead_failure_and_stays_pending() {
    let package_id = Uuid::new_v4();
    let payment_id = Uuid::new_v4();

    let mut lead_repo = MockLeadRepository::new();
    lead_repo
        .expect_insert()
        .withf(|lead| lead.source == "checkout")
        .times(1)
        .returning(|_| Box::pin(async { Err(anyhow::anyhow!("leads table locked")) }));

    let mut payment_repo = MockPaymentTrackingRepository::new();
    payment_repo
        .expect_create()
        .withf(|payment| {
            payment.status == "pending" && payment.amount == 13500 && payment.channel == "manual_upi"
        })
        .times(1)
        .returning(move |payment| Box::pin(async move { Ok(record_from(payment, payment_id)) }));
    payment_repo.expect_update_status().never();

    let checkout = usecase(
        package_repo(package_id),
        save10_coupon_repo(),
        lead_repo,
        payment_repo,
        MockPaymentGateway::new(),
    );

    let response = checkout
        .start(checkout_model(package_id, PaymentChannel::ManualUpi))
        .await
        .unwrap();

    assert_eq!(response.payment_id, payment_id);
    assert_eq!(response.state, CheckoutState::ManualQr);
    assert_eq!(response.quote.final_price, 13500);

    let CheckoutDispatch::ManualUpi { upi_uri, qr_svg } = response.dispatch else {
        panic!("expected manual upi dispatch");
    };
    assert!(upi_uri.starts_with("upi://pay?pa=healing.coach%40okaxis"));
    assert!(upi_uri.contains("am=13500"));
    assert!(upi_uri.contains("cu=INR"));
    assert!(qr_svg.contains("<svg"));
}

#[tokio::test]
async fn gateway_checkout_creates_order_in_paise() {
    let package_id = Uuid::new_v4();
    let payment_id = Uuid::new_v4();

    let mut payment_repo = MockPaymentTrackingRepository::new();
    payment_repo
        .expect_create()
        .returning(move |payment| Box::pin(async move { Ok(record_from(payment, payment_id)) }));
    payment_repo
        .expect_attach_gateway_order()
        .with(eq(payment_id), eq("order_9A33XWu170gUtm".to_string()))
        .times(1)
        .returning(|_, _| Box::pin(async { Ok(()) }));

    let mut gateway = MockPaymentGateway::new();
    gateway
        .expect_create_order()
        .with(eq(1_350_000_i64), eq(payment_id.to_string()), always())
        .times(1)
        .returning(|amount, _, _| {
            Ok(RazorpayOrder {
                id: "order_9A33XWu170gUtm".to_string(),
                amount,
                currency: "INR".to_string(),
                status: Some("created".to_string()),
            })
        });
    gateway
        .expect_key_id()
        .returning(|| "rzp_test_key".to_string());

    let checkout = usecase(
        package_repo(package_id),
        save10_coupon_repo(),
        accepting_lead_repo(),
        payment_repo,
        gateway,
    );

    let response = checkout
        .start(checkout_model(package_id, PaymentChannel::Gateway))
        .await
        .unwrap();

    assert_eq!(response.state, CheckoutState::GatewayCheckout);
    assert_eq!(
        response.dispatch,
        CheckoutDispatch::Gateway {
            order_id: "order_9A33XWu170gUtm".to_string(),
            amount: 1_350_000,
            currency: "INR".to_string(),
            key_id: "rzp_test_key".to_string(),
        }
    );
}

#[tokio::test]
async fn gateway_outage_marks_record_failed() {
    let package_id = Uuid::new_v4();
    let payment_id = Uuid::new_v4();

    let mut payment_repo = MockPaymentTrackingRepository::new();
    payment_repo
        .expect_create()
        .returning(move |payment| Box::pin(async move { Ok(record_from(payment, payment_id)) }));
    payment_repo
        .expect_update_status()
        .with(eq(payment_id), eq(PaymentStatus::Failed), eq(None))
        .times(1)
        .returning(|_, _, _| Box::pin(async { Ok(None) }));
    payment_repo.expect_attach_gateway_order().never();

    let mut gateway = MockPaymentGateway::new();
    gateway
        .expect_create_order()
        .returning(|_, _, _| Err(anyhow::anyhow!("503 from gateway")));

    let checkout = usecase(
        package_repo(package_id),
        save10_coupon_repo(),
        accepting_lead_repo(),
        payment_repo,
        gateway,
    );

    let err = checkout
        .start(checkout_model(package_id, PaymentChannel::Gateway))
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Gateway(_)));
    assert_eq!(err.status_code(), axum::http::StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn rejected_coupon_stores_nothing() {
    let package_id = Uuid::new_v4();

    let mut lead_repo = MockLeadRepository::new();
    lead_repo.expect_insert().never();
    let mut payment_repo = MockPaymentTrackingRepository::new();
    payment_repo.expect_create().never();

    let checkout = usecase(
        package_repo(package_id),
        save10_coupon_repo(),
        lead_repo,
        payment_repo,
        MockPaymentGateway::new(),
    );

    let mut model = checkout_model(package_id, PaymentChannel::ManualUpi);
    model.coupon_code = Some("BOGUS".to_string());

    let err = checkout.start(model).await.unwrap_err();
    assert_eq!(err.to_string(), "Invalid coupon code");
    assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bad_signature_leaves_status_unchanged() {
    let payment_id = Uuid::new_v4();

    let mut payment_repo = MockPaymentTrackingRepository::new();
    payment_repo
        .expect_find_by_gateway_order_id()
        .with(eq("order_123".to_string()))
        .returning(move |_| {
            Box::pin(async move { Ok(Some(pending_record(payment_id, PaymentChannel::Gateway))) })
        });
    payment_repo.expect_update_status().never();

    let mut gateway = MockPaymentGateway::new();
    gateway
        .expect_verify_signature()
        .returning(|_, _, _| Ok(false));

    let checkout = usecase(
        MockPackageRepository::new(),
        MockCouponRepository::new(),
        MockLeadRepository::new(),
        payment_repo,
        gateway,
    );

    let err = checkout
        .verify(VerifyPaymentModel {
            order_id: "order_123".to_string(),
            payment_id: "pay_456".to_string(),
            signature: "deadbeef".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::InvalidSignature));
}

#[tokio::test]
async fn valid_signature_marks_payment_success() {
    let payment_id = Uuid::new_v4();

    let mut payment_repo = MockPaymentTrackingRepository::new();
    payment_repo
        .expect_find_by_gateway_order_id()
        .returning(move |_| {
            Box::pin(async move { Ok(Some(pending_record(payment_id, PaymentChannel::Gateway))) })
        });
    payment_repo
        .expect_update_status()
        .with(
            eq(payment_id),
            eq(PaymentStatus::Success),
            eq(Some("pay_456".to_string())),
        )
        .times(1)
        .returning(|payment_id, status, gateway_payment_id| {
            let mut record = pending_record(payment_id, PaymentChannel::Gateway);
            record.status = status.to_string();
            record.gateway_payment_id = gateway_payment_id;
            Box::pin(async move { Ok(Some(record)) })
        });

    let mut gateway = MockPaymentGateway::new();
    gateway
        .expect_verify_signature()
        .withf(|order_id, payment_id, _| {
            order_id.to_string() == "order_123" && payment_id.to_string() == "pay_456"
        })
        .returning(|_, _, _| Ok(true));

    let checkout = usecase(
        MockPackageRepository::new(),
        MockCouponRepository::new(),
        MockLeadRepository::new(),
        payment_repo,
        gateway,
    );

    let response = checkout
        .verify(VerifyPaymentModel {
            order_id: "order_123".to_string(),
            payment_id: "pay_456".to_string(),
            signature: "cafe".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.status, PaymentStatus::Success);
    assert_eq!(
        response.state,
        CheckoutState::Resolved(CheckoutOutcome::Success)
    );
}

#[tokio::test]
async fn cancelled_gateway_checkout_writes_nothing() {
    let payment_id = Uuid::new_v4();

    let mut payment_repo = MockPaymentTrackingRepository::new();
    payment_repo
        .expect_find_by_id()
        .with(eq(payment_id))
        .returning(move |_| {
            Box::pin(async move { Ok(Some(pending_record(payment_id, PaymentChannel::Gateway))) })
        });
    payment_repo.expect_update_status().never();
    payment_repo.expect_update().never();

    let checkout = usecase(
        MockPackageRepository::new(),
        MockCouponRepository::new(),
        MockLeadRepository::new(),
        payment_repo,
        MockPaymentGateway::new(),
    );

    assert_eq!(checkout.cancel(payment_id).await.unwrap(), CheckoutState::Idle);
}

#[tokio::test]
async fn cancel_after_success_is_rejected() {
    let payment_id = Uuid::new_v4();

    let mut payment_repo = MockPaymentTrackingRepository::new();
    payment_repo.expect_find_by_id().returning(move |_| {
        let mut record = pending_record(payment_id, PaymentChannel::Gateway);
        record.status = PaymentStatus::Success.to_string();
        Box::pin(async move { Ok(Some(record)) })
    });
    payment_repo.expect_update_status().never();

    let checkout = usecase(
        MockPackageRepository::new(),
        MockCouponRepository::new(),
        MockLeadRepository::new(),
        payment_repo,
        MockPaymentGateway::new(),
    );

    let err = checkout.cancel(payment_id).await.unwrap_err();
    assert!(matches!(err, CheckoutError::Transition(_)));
    assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn verify_on_resolved_payment_is_rejected() {
    let payment_id = Uuid::new_v4();

    let mut payment_repo = MockPaymentTrackingRepository::new();
    payment_repo
        .expect_find_by_gateway_order_id()
        .returning(move |_| {
            let mut record = pending_record(payment_id, PaymentChannel::Gateway);
            record.status = PaymentStatus::Failed.to_string();
            Box::pin(async move { Ok(Some(record)) })
        });
    payment_repo.expect_update_status().never();

    let mut gateway = MockPaymentGateway::new();
    gateway.expect_verify_signature().never();

    let checkout = usecase(
        MockPackageRepository::new(),
        MockCouponRepository::new(),
        MockLeadRepository::new(),
        payment_repo,
        gateway,
    );

    let err = checkout
        .verify(VerifyPaymentModel {
            order_id: "order_123".to_string(),
            payment_id: "pay_456".to_string(),
            signature: "cafe".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::AlreadyResolved(PaymentStatus::Failed)));
    assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn unknown_stored_status_is_not_treated_as_pending() {
    let payment_id = Uuid::new_v4();

    let mut payment_repo = MockPaymentTrackingRepository::new();
    payment_repo
        .expect_find_by_gateway_order_id()
        .returning(move |_| {
            let mut record = pending_record(payment_id, PaymentChannel::Gateway);
            record.status = "refunded".to_string();
            Box::pin(async move { Ok(Some(record)) })
        });
    payment_repo.expect_update_status().never();

    let mut gateway = MockPaymentGateway::new();
    gateway.expect_verify_signature().never();

    let checkout = usecase(
        MockPackageRepository::new(),
        MockCouponRepository::new(),
        MockLeadRepository::new(),
        payment_repo,
        gateway,
    );

    let err = checkout
        .verify(VerifyPaymentModel {
            order_id: "order_123".to_string(),
            payment_id: "pay_456".to_string(),
            signature: "cafe".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Internal(_)));
}

#[tokio::test]
async fn free_order_is_refused_before_storing() {
    let package_id = Uuid::new_v4();

    let mut coupon_repo = MockCouponRepository::new();
    coupon_repo.expect_find_active_by_code().returning(|code| {
        Box::pin(async move {
            Ok(Some(CouponModel {
                code,
                discount_type: DiscountType::Flat,
                discount_amount: 20000.0,
                expiry_date: None,
                is_active: true,
            }))
        })
    });

    let mut lead_repo = MockLeadRepository::new();
    lead_repo.expect_insert().never();
    let mut payment_repo = MockPaymentTrackingRepository::new();
    payment_repo.expect_create().never();
    let mut gateway = MockPaymentGateway::new();
    gateway.expect_create_order().never();

    let checkout = usecase(
        package_repo(package_id),
        coupon_repo,
        lead_repo,
        payment_repo,
        gateway,
    );

    let mut model = checkout_model(package_id, PaymentChannel::Gateway);
    model.coupon_code = Some("FREEBIE".to_string());

    let err = checkout.start(model).await.unwrap_err();
    assert!(matches!(err, CheckoutError::ZeroAmount));
    assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
}

#[test]
fn upi_note_is_short() {
    let note = upi_note("Clarity", Uuid::nil());
    assert_eq!(note, "Clarity 00000000");
}
