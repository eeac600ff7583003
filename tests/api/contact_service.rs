//! tests/api/contact_service.rs

use crate::helpers::{
    message_fields, mount_gateway, received_messages, spawn_service_with, valid_form,
    MESSAGES_PATH,
};
use contact_desk::contact::{SenderPolicy, SubmissionResult};
use contact_desk::domain::InquiryForm;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn valid_inquiry_with_a_healthy_gateway_is_sent() {
    // Arrange
    let (service, email_server) = spawn_service_with(|_| {}).await;
    mount_gateway(&email_server, 200, 1).await;

    // Act
    let result = service.submit(valid_form()).await;

    // Assert
    assert_eq!(result, SubmissionResult::Success);
}

#[tokio::test]
async fn invalid_email_is_rejected_without_calling_the_gateway() {
    // Arrange
    let (service, email_server) = spawn_service_with(|_| {}).await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&email_server)
        .await;
    let test_cases = vec![
        ("not-an-email", "no at symbol"),
        ("", "empty email"),
        ("jane@x", "no top level domain"),
        ("jane doe@x.com", "whitespace in local part"),
    ];

    for (email, description) in test_cases {
        let form = InquiryForm {
            email: email.into(),
            ..valid_form()
        };

        // Act
        let result = service.submit(form).await;

        // Assert
        assert_eq!(
            result,
            SubmissionResult::ValidationError("invalid email".into()),
            "The service did not reject the email when it had {}.",
            description
        );
    }
}

#[tokio::test]
async fn padded_email_is_rejected_without_calling_the_gateway() {
    // Arrange
    let (service, email_server) = spawn_service_with(|_| {}).await;
    mount_gateway(&email_server, 200, 0).await;

    for email in [" jane@x.com ", "  jane@x.com\n"] {
        // Act
        let result = service
            .submit(InquiryForm {
                email: email.into(),
                ..valid_form()
            })
            .await;

        // Assert
        assert_eq!(
            result,
            SubmissionResult::ValidationError("invalid email".into()),
            "{:?} was accepted",
            email
        );
    }
}

#[tokio::test]
async fn long_fields_are_sent_as_is() {
    let (service, email_server) = spawn_service_with(|_| {}).await;
    mount_gateway(&email_server, 200, 1).await;

    let result = service
        .submit(InquiryForm {
            name: "J".repeat(300),
            subject: "S".repeat(300),
            message: "x".repeat(5001),
            ..valid_form()
        })
        .await;

    assert_eq!(result, SubmissionResult::Success);
}

#[tokio::test]
async fn empty_fields_are_rejected_without_calling_the_gateway() {
    let (service, email_server) = spawn_service_with(|_| {}).await;
    mount_gateway(&email_server, 200, 0).await;

    let result = service
        .submit(InquiryForm {
            message: "   ".into(),
            ..valid_form()
        })
        .await;

    assert_eq!(
        result,
        SubmissionResult::ValidationError("message must not be empty".into())
    );
}

#[tokio::test]
async fn missing_api_key_is_a_configuration_error() {
    // Arrange
    let (service, email_server) = spawn_service_with(|c| c.emailclient.api_key = None).await;
    mount_gateway(&email_server, 200, 0).await;

    // Act
    let result = service.submit(valid_form()).await;

    // Assert
    assert_eq!(
        result,
        SubmissionResult::ConfigurationError("missing credentials".into())
    );
}

#[tokio::test]
async fn missing_domain_is_a_configuration_error() {
    let (service, email_server) = spawn_service_with(|c| c.emailclient.domain = None).await;
    mount_gateway(&email_server, 200, 0).await;

    let result = service.submit(valid_form()).await;

    assert!(matches!(result, SubmissionResult::ConfigurationError(_)));
}

#[tokio::test]
async fn validation_is_checked_before_configuration() {
    let (service, email_server) = spawn_service_with(|c| c.emailclient.api_key = None).await;
    mount_gateway(&email_server, 200, 0).await;

    let result = service
        .submit(InquiryForm {
            email: "not-an-email".into(),
            ..valid_form()
        })
        .await;

    assert_eq!(
        result,
        SubmissionResult::ValidationError("invalid email".into())
    );
}

#[tokio::test]
async fn unauthorized_gateway_is_a_delivery_error() {
    // Arrange
    let (service, email_server) = spawn_service_with(|_| {}).await;
    Mock::given(path(MESSAGES_PATH))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Forbidden"))
        .expect(1)
        .mount(&email_server)
        .await;

    // Act
    let result = service.submit(valid_form()).await;

    // Assert
    match result {
        SubmissionResult::DeliveryError(reason) => {
            assert!(!reason.is_empty());
            assert!(reason.contains("Forbidden"), "{}", reason);
        }
        other => panic!("expected a delivery error, got {:?}", other),
    }
}

#[tokio::test]
async fn delivery_faults_are_not_retried() {
    let (service, email_server) = spawn_service_with(|_| {}).await;
    mount_gateway(&email_server, 500, 1).await;

    let result = service.submit(valid_form()).await;

    assert!(matches!(result, SubmissionResult::DeliveryError(_)));
}

#[tokio::test]
async fn slow_gateway_is_reported_as_a_timeout() {
    let (service, email_server) = spawn_service_with(|c| c.emailclient.timeout_milliseconds = 100).await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(30)))
        .expect(1)
        .mount(&email_server)
        .await;

    let result = service.submit(valid_form()).await;

    assert_eq!(result, SubmissionResult::DeliveryError("timeout".into()));
}

#[tokio::test]
async fn submitting_the_same_form_twice_sends_twice() {
    let (service, email_server) = spawn_service_with(|_| {}).await;
    mount_gateway(&email_server, 200, 2).await;

    let first = service.submit(valid_form()).await;
    let second = service.submit(valid_form()).await;

    assert_eq!(first, SubmissionResult::Success);
    assert_eq!(second, SubmissionResult::Success);
}

#[tokio::test]
async fn concurrent_submissions_do_not_interfere() {
    // Arrange
    let (service, email_server) = spawn_service_with(|_| {}).await;
    mount_gateway(&email_server, 200, 2).await;
    let jane = valid_form();
    let john = InquiryForm {
        name: "John".into(),
        email: "john@y.org".into(),
        subject: "Offer".into(),
        message: "Let's talk".into(),
    };

    // Act
    let (first, second) = tokio::join!(service.submit(jane), service.submit(john));

    // Assert
    assert_eq!(first, SubmissionResult::Success);
    assert_eq!(second, SubmissionResult::Success);
    let mut reply_to_and_subject: Vec<(String, String)> = received_messages(&email_server)
        .await
        .iter()
        .map(|m| {
            let fields = message_fields(m);
            (fields["h:Reply-To"].clone(), fields["subject"].clone())
        })
        .collect();
    reply_to_and_subject.sort();
    assert_eq!(
        reply_to_and_subject,
        vec![
            ("jane@x.com".to_string(), "[Website] Hi".to_string()),
            ("john@y.org".to_string(), "[Website] Offer".to_string()),
        ]
    );
}

#[tokio::test]
async fn dispatched_message_follows_the_delivery_policy() {
    // Arrange
    let (service, email_server) = spawn_service_with(|_| {}).await;
    mount_gateway(&email_server, 200, 1).await;

    // Act
    service.submit(valid_form()).await;

    // Assert
    let messages = received_messages(&email_server).await;
    let recipients: Vec<&str> = messages[0]
        .iter()
        .filter(|(k, _)| k == "to")
        .map(|(_, v)| v.as_str())
        .collect();
    assert_eq!(recipients, vec!["info@example.com", "sales@example.com"]);
    let fields = message_fields(&messages[0]);
    assert_eq!(fields["from"], "Lasha Consultancy <no-reply@mg.example.com>");
    assert_eq!(fields["h:Reply-To"], "jane@x.com");
    assert_eq!(fields["subject"], "[Website] Hi");
    assert!(fields["text"].contains("Hello"));
    assert!(fields["html"].contains("Hello"));
}

#[tokio::test]
async fn submitter_sender_policy_sends_from_the_submitter() {
    let (service, email_server) = spawn_service_with(|c| {
        c.contact.sender = SenderPolicy::Submitter;
        c.contact.subject_prefix = None;
    })
    .await;
    mount_gateway(&email_server, 200, 1).await;

    service.submit(valid_form()).await;

    let messages = received_messages(&email_server).await;
    let fields = message_fields(&messages[0]);
    assert_eq!(fields["from"], "jane@x.com");
    assert_eq!(fields["subject"], "Hi");
}

#[tokio::test]
async fn user_content_is_escaped_in_the_html_body_only() {
    let (service, email_server) = spawn_service_with(|_| {}).await;
    mount_gateway(&email_server, 200, 1).await;

    service
        .submit(InquiryForm {
            message: "<img src=x onerror=alert(1)>".into(),
            ..valid_form()
        })
        .await;

    let messages = received_messages(&email_server).await;
    let fields = message_fields(&messages[0]);
    assert!(!fields["html"].contains("<img"));
    assert!(fields["html"].contains("&lt;img src=x onerror=alert(1)&gt;"));
    assert!(fields["text"].contains("<img src=x onerror=alert(1)>"));
}

#[tokio::test]
async fn service_without_recipients_cannot_be_built() {
    let email_server = wiremock::MockServer::start().await;
    let mut configuration = crate::helpers::test_configuration(&email_server);
    configuration.contact.recipients.clear();

    let service = contact_desk::contact::ContactService::from_settings(&configuration);

    assert!(service.is_err());
}
