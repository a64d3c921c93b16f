use soulrise_core::error::CoreError;
use soulrise_core::models::quiz::QuizAnswers;
use soulrise_core::models::request::GenerationRequest;

fn complete_answers() -> QuizAnswers {
    QuizAnswers {
        gender: "feminino".to_string(),
        motivation: "saúde mental".to_string(),
        emotional_state: "ansiosa".to_string(),
        routine: "manhãs ocupadas".to_string(),
        time_available: "5 minutos".to_string(),
        spirituality: "cristã".to_string(),
        lacking: "disciplina".to_string(),
        commitment: "alta".to_string(),
    }
}

#[test]
fn complete_answers_validate() {
    assert!(complete_answers().validate().is_ok());
}

#[test]
fn blank_and_whitespace_answers_are_reported_in_order() {
    let answers = QuizAnswers {
        routine: "   ".to_string(),
        gender: String::new(),
        ..complete_answers()
    };

    match answers.validate() {
        Err(CoreError::MissingAnswers(fields)) => {
            assert_eq!(fields, vec!["gender", "routine"]);
        }
        other => panic!("expected MissingAnswers, got {other:?}"),
    }
}

#[test]
fn absent_wire_fields_deserialize_as_missing() {
    let json = r#"{
        "quizAnswers": {
            "gender": "masculino",
            "motivation": "propósito",
            "emotionalState": "cansado"
        },
        "goals": ["gratidão"]
    }"#;

    let request: GenerationRequest = serde_json::from_str(json).expect("request should parse");
    assert_eq!(
        request.quiz_answers.missing_fields(),
        vec!["routine", "timeAvailable", "spirituality", "lacking", "commitment"]
    );
}

#[test]
fn goals_default_to_empty() {
    let json = r#"{"quizAnswers": {}}"#;
    let request: GenerationRequest = serde_json::from_str(json).expect("request should parse");
    assert!(request.goals.is_empty());
    assert_eq!(request.quiz_answers.missing_fields().len(), 8);
}

#[test]
fn distinct_goals_drop_blanks_and_repeats() {
    let request = GenerationRequest::new(
        complete_answers(),
        vec![
            "consistência".to_string(),
            "  ".to_string(),
            "paz".to_string(),
            " consistência ".to_string(),
        ],
    );

    assert_eq!(request.distinct_goals(), vec!["consistência", "paz"]);
}

#[test]
fn null_answers_deserialize_as_missing() {
    let json = r#"{
        "quizAnswers": {
            "gender": null,
            "motivation": "propósito",
            "emotionalState": "cansado",
            "routine": "noites livres",
            "timeAvailable": "10 minutos",
            "spirituality": "católica",
            "lacking": null,
            "commitment": "média"
        },
        "goals": []
    }"#;

    let request: GenerationRequest = serde_json::from_str(json).expect("request should parse");
    assert_eq!(request.quiz_answers.missing_fields(), vec!["gender", "lacking"]);
}

#[test]
fn non_string_answer_is_still_rejected() {
    let json = r#"{"quizAnswers": {"gender": 3}}"#;
    assert!(serde_json::from_str::<GenerationRequest>(json).is_err());
}
