mod common;

use mockito::Matcher;
use onet_web_services::{InterestArea, RiasecScores};
use pretty_assertions::assert_eq;
use serde_json::json;

const ANSWERS: &str = "1,2,3";

#[tokio::test]
async fn test_get_job_zones() {
    let mut env = setup_test!().await;

    let mock = env
        .server
        .mock("GET", "/mnm/interestprofiler/job_zones")
        .with_status(200)
        .with_body(r#"{"job_zone": [{"code": 3, "title": "Medium Preparation Needed"}]}"#)
        .create_async()
        .await;

    let response = env.client.get_job_zones().await;

    mock.assert_async().await;
    assert!(response.success);
    assert_eq!(response.data["job_zone"][0]["code"], json!(3));
}

#[tokio::test]
async fn test_questions_30_default_range() {
    let mut env = setup_test!().await;

    let mock = env
        .server
        .mock("GET", "/mnm/interestprofiler/questions_30")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "1".into()),
            Matcher::UrlEncoded("end".into(), "30".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"question": []}"#)
        .create_async()
        .await;

    let response = env.client.get_interest_profiler_30(None, None).await;

    mock.assert_async().await;
    assert!(response.success);
}

#[tokio::test]
async fn test_questions_60_custom_range() {
    let mut env = setup_test!().await;

    let mock = env
        .server
        .mock("GET", "/mnm/interestprofiler/questions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "13".into()),
            Matcher::UrlEncoded("end".into(), "24".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"start": 13, "end": 24, "total": 60}"#)
        .create_async()
        .await;

    let response = env.client.get_interest_profiler_60(Some(13), Some(24)).await;

    mock.assert_async().await;
    assert_eq!(response.data["total"], json!(60));
}

#[tokio::test]
async fn test_questions_60_default_end() {
    let mut env = setup_test!().await;

    let mock = env
        .server
        .mock("GET", "/mnm/interestprofiler/questions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "1".into()),
            Matcher::UrlEncoded("end".into(), "60".into()),
        ]))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    env.client.get_interest_profiler_60(None, None).await;

    mock.assert_async().await;
}

#[tokio::test]
async fn test_results_by_answers() {
    let mut env = setup_test!().await;

    let mock = env
        .server
        .mock("GET", "/mnm/interestprofiler/results")
        .match_query(Matcher::UrlEncoded("answers".into(), ANSWERS.into()))
        .with_status(200)
        .with_body(r#"{"result": [{"area": "Realistic", "score": 12}]}"#)
        .create_async()
        .await;

    let response = env.client.get_interest_profiler_results(ANSWERS).await;

    mock.assert_async().await;
    assert_eq!(response.data["result"][0]["score"], json!(12));
}

#[tokio::test]
async fn test_careers_by_answers_with_job_zone() {
    let mut env = setup_test!().await;

    let mock = env
        .server
        .mock("GET", "/mnm/interestprofiler/careers")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("answers".into(), ANSWERS.into()),
            Matcher::UrlEncoded("job_zone".into(), "3".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"career": []}"#)
        .create_async()
        .await;

    let response = env
        .client
        .get_interest_profiler_matching_careers_by_answers(ANSWERS, Some(3))
        .await;

    mock.assert_async().await;
    assert!(response.success);
}

#[tokio::test]
async fn test_careers_by_answers_drops_out_of_range_job_zone() {
    let mut env = setup_test!().await;

    // The whole query must be just the answers
    let mock = env
        .server
        .mock("GET", "/mnm/interestprofiler/careers")
        .match_query(Matcher::Regex("^answers=1(%2C|,)2(%2C|,)3$".into()))
        .with_status(200)
        .with_body(r#"{"career": []}"#)
        .expect(2)
        .create_async()
        .await;

    let out_of_range = env
        .client
        .get_interest_profiler_matching_careers_by_answers(ANSWERS, Some(7))
        .await;
    let default = env
        .client
        .get_interest_profiler_matching_careers_by_answers(ANSWERS, None)
        .await;

    mock.assert_async().await;
    assert!(out_of_range.success, "errors: {:?}", out_of_range.errors);
    assert!(default.success, "errors: {:?}", default.errors);
}

#[tokio::test]
async fn test_careers_by_riasec_forwards_scores() {
    let mut env = setup_test!().await;

    let mock = env
        .server
        .mock("GET", "/mnm/interestprofiler/careers")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("Realistic".into(), "10".into()),
            Matcher::UrlEncoded("Investigative".into(), "22".into()),
            Matcher::UrlEncoded("Artistic".into(), "31".into()),
            Matcher::UrlEncoded("Social".into(), "4".into()),
            Matcher::UrlEncoded("Enterprising".into(), "0".into()),
            Matcher::UrlEncoded("Conventional".into(), "18".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"career": [{"code": "15-1252.00"}]}"#)
        .create_async()
        .await;

    let scores = RiasecScores {
        realistic: 10,
        investigative: 22,
        artistic: 31,
        social: 4,
        enterprising: 0,
        conventional: 18,
    };
    let response = env
        .client
        .get_interest_profiler_matching_careers_by_riasec(&scores)
        .await;

    mock.assert_async().await;
    assert_eq!(response.data["career"][0]["code"], json!("15-1252.00"));
}

#[tokio::test]
async fn test_results_by_area_with_job_zone() {
    let mut env = setup_test!().await;

    let mock = env
        .server
        .mock("GET", "/mnm/interestprofiler/results")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("area".into(), "investigative".into()),
            Matcher::UrlEncoded("job_zone".into(), "5".into()),
        ]))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let response = env
        .client
        .get_interest_profiler_results_by_area(InterestArea::Investigative, Some(5))
        .await;

    mock.assert_async().await;
    assert!(response.success);
}

#[tokio::test]
async fn test_results_by_area_without_job_zone() {
    let mut env = setup_test!().await;

    let mock = env
        .server
        .mock("GET", "/mnm/interestprofiler/results")
        .match_query(Matcher::Exact("area=artistic".into()))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let response = env
        .client
        .get_interest_profiler_results_by_area(InterestArea::Artistic, Some(0))
        .await;

    mock.assert_async().await;
    assert!(response.success);
}

#[tokio::test]
async fn test_profiler_validation_error_is_returned_as_data() {
    let mut env = setup_test!().await;

    let _mock = env
        .server
        .mock("GET", "/mnm/interestprofiler/results")
        .match_query(Matcher::Any)
        .with_status(422)
        .with_body(r#"{"error": "answers must contain 60 digits"}"#)
        .create_async()
        .await;

    let response = env.client.get_interest_profiler_results("123").await;

    assert!(!response.success);
    assert!(response.errors.is_empty());
    assert_eq!(response.data, json!({"error": "answers must contain 60 digits"}));
}
