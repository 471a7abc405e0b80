use std::time::Duration;

use hackathon_registration::api::create_router;
use hackathon_registration::config::AppConfig;
use hackathon_registration::create_app_state;
use hackathon_registration::wizard::{
    ClientError, FormField, FormWizard, HttpRegistrationClient, MemberField, WizardError,
    WizardStep, SUBMIT_SUCCESS_NOTICE,
};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let app = create_router(create_app_state(&AppConfig::default()).unwrap());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn filled_wizard() -> FormWizard {
    let mut wizard = FormWizard::new();
    wizard.update_field(FormField::TeamName, "Alpha");
    wizard.update_field(FormField::TeamLeaderName, "A");
    wizard.update_field(FormField::TeamLeaderEmail, "a@b.com");
    wizard.update_field(FormField::TeamLeaderPhone, "9876543210");
    wizard.update_field(FormField::TeamSize, "2");
    wizard.update_member(0, MemberField::Name, "B");
    wizard.update_member(0, MemberField::Email, "b@c.com");
    wizard.update_member(0, MemberField::Phone, "9876543211");
    wizard.update_field(FormField::ProblemTrack, "ocr-system");
    wizard
}

#[tokio::test]
async fn test_wizard_submits_to_server() {
    let base_url = spawn_server().await;
    let client = HttpRegistrationClient::new(&base_url, Duration::from_secs(5)).unwrap();

    let mut wizard = filled_wizard();
    while wizard.step() != WizardStep::Review {
        wizard.advance().unwrap();
    }

    let submission = wizard.submit(&client).await.unwrap();

    assert!(submission.team_id.starts_with("nutpam-2025-"));
    assert_eq!(submission.notice, SUBMIT_SUCCESS_NOTICE);
    assert_eq!(wizard.step(), WizardStep::TeamInfo);
    assert!(wizard.form().team_name.is_empty());
}

#[tokio::test]
async fn test_server_rejection_keeps_wizard_state() {
    let base_url = spawn_server().await;
    let client = HttpRegistrationClient::new(&base_url, Duration::from_secs(5)).unwrap();

    // Skips the step checks, so the server is the one rejecting.
    let mut wizard = filled_wizard();
    wizard.update_field(FormField::TeamLeaderEmail, "broken");
    let before = wizard.clone();

    let err = wizard.submit(&client).await.unwrap_err();

    match err {
        WizardError::SubmitFailed(ClientError::Rejected { status, errors }) => {
            assert_eq!(status, 400);
            assert_eq!(errors["teamLeaderEmail"], "Invalid email format");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(wizard, before);
}
