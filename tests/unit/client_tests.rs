/*!
 * Tests for the language listing and translation fetch operations
 */

use onesky_client::{
    ClientError, Language, Method, MockTransport, TransportResponse,
};

use crate::common::{client_over, query_pairs, query_param, LANGUAGES_BODY};

#[tokio::test]
async fn test_fetchLanguages_okResponse_shouldReturnDataField() {
    let transport = MockTransport::ok(LANGUAGES_BODY);
    let client = client_over(transport);

    let languages = client.fetch_languages().await.unwrap();
    assert_eq!(
        languages,
        vec![
            Language { code: "fr".to_string() },
            Language { code: "en".to_string() },
        ]
    );
}

#[tokio::test]
async fn test_fetchLanguages_shouldSignTheRequest() {
    let transport = MockTransport::ok(LANGUAGES_BODY);
    let client = client_over(transport.clone());

    client.fetch_languages().await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);

    let url = &requests[0].url;
    assert!(url.starts_with("https://platform.api.onesky.io/1/projects/proj-1/languages?"));

    // Authentication parameters come first, in a fixed order
    let pairs = query_pairs(url);
    assert_eq!(pairs[0].0, "api_key");
    assert_eq!(pairs[0].1, "test-api-key");
    assert_eq!(pairs[1].0, "dev_hash");
    assert_eq!(pairs[1].1.len(), 32);
    assert_eq!(pairs[2].0, "timestamp");
    assert!(pairs[2].1.parse::<i64>().is_ok());
    assert_eq!(pairs.len(), 3);
}

#[tokio::test]
async fn test_fetchLanguages_errorStatus_shouldFailWithStatusMessage() {
    let transport = MockTransport::failing(404, "Not Found");
    let client = client_over(transport);

    let error = client.fetch_languages().await.unwrap_err();
    match &error {
        ClientError::Api { status_code, .. } => assert_eq!(*status_code, 404),
        other => panic!("Unexpected error type: {:?}", other),
    }
    assert!(format!("{}", error).contains("Not Found"));
}

#[tokio::test]
async fn test_fetchLanguages_malformedBody_shouldFailWithParseError() {
    let transport = MockTransport::ok("not json");
    let client = client_over(transport);

    let error = client.fetch_languages().await.unwrap_err();
    assert!(matches!(error, ClientError::Parse(_)));
}

#[tokio::test]
async fn test_fetchLanguages_transportFailure_shouldPropagate() {
    let transport = MockTransport::disconnected();
    let client = client_over(transport);

    let error = client.fetch_languages().await.unwrap_err();
    assert!(matches!(error, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_fetchTranslations_twoLocales_shouldDispatchOneRequestPerLocale() {
    let transport = MockTransport::ok("exported").with_responder(|url, _| {
        if url.contains("locale=fr") {
            MockTransport::ok_response("bonjour")
        } else {
            MockTransport::ok_response("hello")
        }
    });
    let client = client_over(transport.clone());

    let results = client
        .fetch_translations(["fr", "en"], "app.json")
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].language, "fr");
    assert_eq!(results[0].text, "bonjour");
    assert_eq!(results[1].language, "en");
    assert_eq!(results[1].text, "hello");

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert!(request
            .url
            .contains("https://platform.api.onesky.io/1/projects/proj-1/translations?"));
        assert_eq!(
            query_param(&request.url, "source_file_name").as_deref(),
            Some("app.json")
        );
    }
    let locales: Vec<Option<String>> = requests
        .iter()
        .map(|request| query_param(&request.url, "locale"))
        .collect();
    assert_eq!(locales, vec![Some("fr".to_string()), Some("en".to_string())]);
    assert_eq!(
        query_param(&requests[0].url, "export_file_name").as_deref(),
        Some("fr.json")
    );
    assert_eq!(
        query_param(&requests[1].url, "export_file_name").as_deref(),
        Some("en.json")
    );
}

#[tokio::test]
async fn test_fetchTranslations_shouldPreserveInputOrderWhenCompletionOrderDiffers() {
    // The fr response is held back so the en request resolves first; the
    // aggregate result must still follow the requested order.
    let transport = MockTransport::ok("")
        .with_responder(|url, _| {
            if url.contains("locale=fr") {
                MockTransport::ok_response("bonjour")
            } else {
                MockTransport::ok_response("hello")
            }
        })
        .with_delay(|url| if url.contains("locale=fr") { 40 } else { 0 });
    let client = client_over(transport);

    let results = client
        .fetch_translations(["fr", "en"], "app.json")
        .await
        .unwrap();

    let languages: Vec<&str> = results.iter().map(|r| r.language.as_str()).collect();
    assert_eq!(languages, vec!["fr", "en"]);
    assert_eq!(results[0].text, "bonjour");
    assert_eq!(results[1].text, "hello");
}

#[tokio::test]
async fn test_fetchTranslations_singleCode_shouldNormalizeToOneRequest() {
    let transport = MockTransport::ok("texto");
    let client = client_over(transport.clone());

    let results = client.fetch_translations("es", "app.json").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].language, "es");
    assert_eq!(results[0].text, "texto");
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_fetchTranslations_oneFailureAmongMany_shouldFailTheAggregate() {
    // Status 300 is already above the acceptance threshold
    let transport = MockTransport::ok("").with_responder(|url, _| {
        if url.contains("locale=de") {
            TransportResponse {
                status: 300,
                status_message: "Multiple Choices".to_string(),
                body: String::new(),
            }
        } else {
            MockTransport::ok_response("exported")
        }
    });
    let client = client_over(transport);

    let error = client
        .fetch_translations(["fr", "de", "en"], "app.json")
        .await
        .unwrap_err();

    match error {
        ClientError::Api { status_code, message } => {
            assert_eq!(status_code, 300);
            assert_eq!(message, "Multiple Choices");
        }
        other => panic!("Unexpected error type: {:?}", other),
    }
}

#[tokio::test]
async fn test_fetchTranslations_shouldRecomputeSignaturePerRequest() {
    let transport = MockTransport::ok("exported");
    let client = client_over(transport.clone());

    client
        .fetch_translations(["fr", "en", "de"], "app.json")
        .await
        .unwrap();

    // Every dispatched request carries its own freshly computed pair; the
    // hash is a pure function of the (timestamp, secret) inputs.
    for request in transport.requests() {
        let timestamp: i64 = query_param(&request.url, "timestamp")
            .unwrap()
            .parse()
            .unwrap();
        let expected = onesky_client::sign_at("test-secret", timestamp).dev_hash;
        assert_eq!(query_param(&request.url, "dev_hash").unwrap(), expected);
    }
}
