mod common;
use common::fixed_now;
use envwatch::errors::{AppError, AppResult};
use envwatch::forecast::gemini::{GenerateRequest, GenerateResponse, text_from_body};
use envwatch::forecast::parse::{extract_json, parse_forecast};
use envwatch::forecast::prompt::build_question_prompt;
use envwatch::forecast::{
    AnswerOutcome, ForecastOutcome, GenerativeModel, ask, request_forecast,
};
use envwatch::models::reading::Reading;
use std::cell::RefCell;

/// Returns a canned reply and remembers the prompts it was given.
struct StubModel {
    reply: AppResult<String>,
    prompts: RefCell<Vec<String>>,
}

impl StubModel {
    fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    fn failing(msg: &str) -> Self {
        Self {
            reply: Err(AppError::Http(msg.to_string())),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl GenerativeModel for StubModel {
    fn generate_content(&self, prompt: &str) -> AppResult<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(e) => Err(AppError::Http(e.to_string())),
        }
    }
}

fn latest() -> Reading {
    Reading::validated(fixed_now(), "Bangkok", 82.0, 290.0, 31.5, 7.9).unwrap()
}

const GOOD_REPLY: &str = r#"{
  "forecast": [
    {"hours": 6, "pm25": 70.5, "hardness": 280},
    {"hours": 12, "pm25": 60, "hardness": 275},
    {"hours": 24, "pm25": 45, "hardness": 260}
  ],
  "alert": "PM2.5 above the standard",
  "recommend": "Wear an N95 mask outdoors"
}"#;

#[test]
fn structured_forecast_is_parsed() {
    let model = StubModel::replying(GOOD_REPLY);
    let outcome = request_forecast(&model, &latest(), "Bangkok", "Thai");

    let ForecastOutcome::Structured { forecast, raw } = outcome else {
        panic!("expected a structured forecast");
    };
    assert_eq!(raw, GOOD_REPLY);
    assert_eq!(forecast.forecast.len(), 3);
    assert_eq!(forecast.forecast[0].hours, 6);
    assert_eq!(forecast.forecast[0].pm25, 70.5);
    assert_eq!(forecast.forecast[2].hardness, 260.0);
    assert_eq!(forecast.alert.as_deref(), Some("PM2.5 above the standard"));
    assert_eq!(forecast.recommend.as_deref(), Some("Wear an N95 mask outdoors"));
}

#[test]
fn fenced_json_reply_is_still_structured() {
    let fenced = format!("```json\n{GOOD_REPLY}\n```");
    let model = StubModel::replying(&fenced);

    match request_forecast(&model, &latest(), "Bangkok", "Thai") {
        ForecastOutcome::Structured { forecast, raw } => {
            assert_eq!(forecast.forecast.len(), 3);
            assert_eq!(raw, fenced);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn malformed_reply_is_returned_unmodified() {
    let text = "Sorry, I can only answer in prose: PM2.5 will drop tonight.";
    let model = StubModel::replying(text);

    assert_eq!(
        request_forecast(&model, &latest(), "Bangkok", "Thai"),
        ForecastOutcome::Raw(text.to_string())
    );
}

#[test]
fn json_object_without_forecast_data_is_shown_raw() {
    let text = r#"{"error":"I cannot forecast without more history, please send 24h data"}"#;
    let model = StubModel::replying(text);

    assert_eq!(
        request_forecast(&model, &latest(), "Bangkok", "Thai"),
        ForecastOutcome::Raw(text.to_string())
    );
}

#[test]
fn transport_failure_does_not_escape() {
    let model = StubModel::failing("connection refused");

    match request_forecast(&model, &latest(), "Bangkok", "Thai") {
        ForecastOutcome::Unavailable(msg) => assert!(msg.contains("connection refused")),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn forecast_prompt_carries_latest_values_and_location() {
    let model = StubModel::replying(GOOD_REPLY);
    request_forecast(&model, &latest(), "Chiang Mai", "English");

    let prompts = model.prompts.borrow();
    assert_eq!(prompts.len(), 1);
    let p = &prompts[0];
    assert!(p.contains("PM2.5 = 82"), "{p}");
    assert!(p.contains("Hardness = 290"), "{p}");
    assert!(p.contains("Temp = 31.5"), "{p}");
    assert!(p.contains("pH = 7.9"), "{p}");
    assert!(p.contains("Location: Chiang Mai"), "{p}");
    assert!(p.contains("6, 12 and 24 hours"), "{p}");
    assert!(p.contains("in English"), "{p}");
    assert!(p.contains("\"forecast\""), "{p}");
}

#[test]
fn question_prompt_and_answer() {
    let model = StubModel::replying("Probably yes, keep windows closed.");
    let outcome = ask(&model, "  Will the dust be bad tomorrow? ", &latest(), "Bangkok", "Thai");

    assert_eq!(
        outcome,
        AnswerOutcome::Answer("Probably yes, keep windows closed.".to_string())
    );

    let p = build_question_prompt("Can I drink this water?", &latest(), "Bangkok", "Thai");
    assert!(p.contains("Can I drink this water?"));
    assert!(p.contains("PM2.5=82"));
    assert!(p.contains("Hardness=290 mg/L"));
    assert!(p.contains("Location: Bangkok"));
    assert_eq!(model.prompts.borrow()[0], build_question_prompt(
        "Will the dust be bad tomorrow?",
        &latest(),
        "Bangkok",
        "Thai"
    ));
}

#[test]
fn failed_question_is_reported() {
    let model = StubModel::failing("timeout");
    assert!(matches!(
        ask(&model, "hello", &latest(), "Bangkok", "Thai"),
        AnswerOutcome::Unavailable(_)
    ));
}

#[test]
fn extract_json_strips_only_a_surrounding_fence() {
    assert_eq!(extract_json("```json\n{\"a\":1}\n```"), "{\"a\":1}");
    assert_eq!(extract_json("```\n{\"a\":1}\n```\n"), "{\"a\":1}");
    assert_eq!(extract_json("  {\"a\":1}  "), "{\"a\":1}");
    assert!(parse_forecast("not json").is_err());
    assert!(parse_forecast("{}").is_err());
    assert!(parse_forecast(r#"{"alert":"dust storm"}"#).is_ok());
}

#[test]
fn gemini_request_body_shape() {
    let body = serde_json::to_value(GenerateRequest::from_prompt("hello")).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
    );
}

#[test]
fn gemini_response_text_is_concatenated() {
    let resp: GenerateResponse = serde_json::from_str(
        r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello "},{"text":"world"}]},"finishReason":"STOP"}]}"#,
    )
    .unwrap();
    assert_eq!(resp.text().as_deref(), Some("Hello world"));

    let empty: GenerateResponse = serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
    assert_eq!(empty.text(), None);
}

#[test]
fn unexpected_gemini_body_is_kept_in_the_error() {
    let blocked = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
    let err = text_from_body(blocked).unwrap_err().to_string();
    assert!(err.contains("no text"), "{err}");
    assert!(err.contains("blockReason"), "{err}");

    let err = text_from_body("<html>gateway</html>").unwrap_err().to_string();
    assert!(err.contains("<html>gateway</html>"), "{err}");

    let ok = r#"{"candidates":[{"content":{"parts":[{"text":"hi"}]}}]}"#;
    assert_eq!(text_from_body(ok).unwrap(), "hi");
}

#[test]
fn failed_request_message_reaches_the_outcome() {
    let model = StubModel {
        reply: text_from_body(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#),
        prompts: std::cell::RefCell::new(Vec::new()),
    };
    match request_forecast(&model, &latest(), "Bangkok", "Thai") {
        ForecastOutcome::Unavailable(msg) => assert!(msg.contains("blockReason"), "{msg}"),
        other => panic!("unexpected outcome {other:?}"),
    }
}
