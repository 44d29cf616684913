//! End-to-end scenarios through the App shell.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use nour::flows::{
    DashboardEvent, EnbdEvent, HelpEvent, ShareEvent, SignInEvent, SignUpEvent, TimerKey, TransferEvent,
    UploadEvent, UploadStage, WalletEvent,
};
use nour::ports::REJECTION_MESSAGE;
use nour::core::search::any_contains;
use nour::core::ValidationChecks;
use nour::{Action, App, AppConfig, DocumentType, NavOutcome, NavTab, Screen, VerificationStatus, UPLOAD_ISSUER};
use nour_testkit::{generators, init_tracing, TestFixture};
use proptest::prelude::*;

async fn upload_passport(app: &mut App, action: UploadEvent) -> Result<()> {
    app.navigate(Screen::Upload).await?;
    app.dispatch(Action::Upload(UploadEvent::ChooseType(DocumentType::Passport))).await?;
    app.dispatch(Action::Upload(action)).await?;
    Ok(())
}

fn upload_stage(app: &App) -> &UploadStage {
    app.mounted().upload().expect("upload mounted").stage()
}

/// Run `f` on a current-thread runtime whose clock auto-advances.
fn block_on_paused<F: Future>(f: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
        .block_on(f)
}

fn assert_check_pattern(stage: &UploadStage) {
    match stage {
        UploadStage::Success { checks, .. } => assert_eq!(*checks, ValidationChecks::all_passed()),
        UploadStage::Error { checks, .. } => assert_eq!(*checks, ValidationChecks::unreadable()),
        other => panic!("expected a finished upload, got {}", other.name()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Auth gate
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_sign_up_wizard_reaches_dashboard() -> Result<()> {
    init_tracing();
    let mut app = App::new(AppConfig::default())?;
    assert_eq!(app.navigate(Screen::Dashboard).await?, NavOutcome::Refused);

    app.dispatch(Action::SignUp(SignUpEvent::Continue)).await?;
    assert!(!app.is_authenticated());
    app.dispatch(Action::SignUp(SignUpEvent::Continue)).await?;
    assert!(app.is_authenticated());
    assert_eq!(app.screen(), Screen::Dashboard);
    assert_eq!(app.navigate(Screen::SignUp).await?, NavOutcome::Refused);
    Ok(())
}

#[tokio::test]
async fn test_sign_in_two_factor_accepts_any_code() -> Result<()> {
    let fixture = TestFixture::new().with_config(AppConfig {
        initial_screen: Screen::SignIn,
        ..AppConfig::default()
    });
    let mut app = fixture.app()?;

    app.dispatch(Action::SignIn(SignInEvent::Continue)).await?;
    assert!(app.mounted().sign_in().is_some_and(|s| s.needs_2fa()));
    app.dispatch(Action::SignIn(SignInEvent::Verify)).await?;
    assert_eq!(app.screen(), Screen::Dashboard);
    Ok(())
}

#[test]
fn test_gated_initial_screen_is_coerced() -> Result<()> {
    let app = App::new(AppConfig {
        initial_screen: Screen::Wallet,
        ..AppConfig::default()
    })?;
    assert_eq!(app.screen(), Screen::SignUp);
    assert!(!app.is_authenticated());
    Ok(())
}

proptest! {
    #[test]
    fn test_signed_out_gate(target in generators::gated_screen()) {
        block_on_paused(async move {
            let mut app = App::new(AppConfig::default()).unwrap();
            let outcome = app.navigate(target).await.unwrap();
            assert_eq!(outcome, NavOutcome::Refused);
            assert_eq!(app.screen(), Screen::SignUp);
            assert!(app.bottom_nav().is_none());
        });
    }

    #[test]
    fn test_tabs_mark_their_target_active(tabs in prop::collection::vec(generators::nav_tab(), 1..6)) {
        block_on_paused(async move {
            let mut app = TestFixture::new().signed_in_app().await.unwrap();
            for tab in tabs {
                app.dispatch(Action::Tab(tab)).await.unwrap();
                assert_eq!(app.screen(), tab.target());
                let nav = app.bottom_nav().expect("tab screens show the bar");
                assert!(nav.iter().all(|item| item.active == (item.tab == tab)));
            }
        });
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Upload
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_upload_verifies_after_delay_and_saves() -> Result<()> {
    let fixture = TestFixture::with_verdicts([true]);
    let mut app = fixture.signed_in_app().await?;
    upload_passport(&mut app, UploadEvent::ChooseFile).await?;

    assert!(matches!(upload_stage(&app), UploadStage::Validating { .. }));
    assert_eq!(fixture.files.picks(), 1);
    assert_eq!(fixture.validator.calls(), 0);

    let started = tokio::time::Instant::now();
    assert_eq!(app.next_timer().await?, Some(TimerKey::UploadValidation));
    assert!(started.elapsed() >= Duration::from_millis(2000));

    let stage = upload_stage(&app);
    assert!(matches!(stage, UploadStage::Success { .. }));
    assert!(stage.checks().is_some_and(|c| c.passed()));
    assert_eq!(fixture.validator.calls(), 1);

    app.dispatch(Action::Upload(UploadEvent::SaveToWallet)).await?;
    let saved = &app.session_documents()[0];
    assert_eq!(saved.id.0, 17);
    assert_eq!(saved.category, "identification");
    assert_eq!(saved.status, VerificationStatus::Verified);
    assert_eq!(saved.issuer, UPLOAD_ISSUER);
    assert_eq!(saved.source, Some(nour_testkit::passport_scan().fingerprint()));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_rejected_photo_can_be_retaken() -> Result<()> {
    let fixture = TestFixture::with_verdicts([false, true]);
    let mut app = fixture.signed_in_app().await?;
    upload_passport(&mut app, UploadEvent::TakePhoto).await?;
    app.run_until_idle().await?;

    match upload_stage(&app) {
        UploadStage::Error { file, message, checks } => {
            assert_eq!(file.filename, "camera-photo.jpg");
            assert_eq!(message, REJECTION_MESSAGE);
            assert!(!checks.passed());
        }
        other => panic!("expected error, got {}", other.name()),
    }

    app.dispatch(Action::Upload(UploadEvent::Retake)).await?;
    app.dispatch(Action::Upload(UploadEvent::TakePhoto)).await?;
    app.run_until_idle().await?;
    assert!(matches!(upload_stage(&app), UploadStage::Success { .. }));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_default_validator_shows_one_outcome() -> Result<()> {
    let mut app = App::new(AppConfig::default())?;
    app.navigate(Screen::SignIn).await?;
    app.dispatch(Action::SignIn(SignInEvent::Biometric)).await?;
    upload_passport(&mut app, UploadEvent::TakePhoto).await?;

    let started = tokio::time::Instant::now();
    assert_eq!(app.next_timer().await?, Some(TimerKey::UploadValidation));
    assert!(started.elapsed() <= Duration::from_millis(2000) + Duration::from_millis(1));
    assert_check_pattern(upload_stage(&app));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_every_upload_lands_in_one_outcome(
        kind in generators::document_type(),
        verdicts in generators::verdicts(),
    ) {
        block_on_paused(async move {
            let fixture = TestFixture::with_verdicts(verdicts.clone());
            let mut app = fixture.signed_in_app().await.unwrap();
            app.navigate(Screen::Upload).await.unwrap();
            app.dispatch(Action::Upload(UploadEvent::ChooseType(kind))).await.unwrap();

            for verdict in verdicts {
                app.dispatch(Action::Upload(UploadEvent::ChooseFile)).await.unwrap();
                assert!(matches!(upload_stage(&app), UploadStage::Validating { .. }));
                app.run_until_idle().await.unwrap();

                let stage = upload_stage(&app);
                assert_eq!(matches!(stage, UploadStage::Success { .. }), verdict);
                assert_check_pattern(stage);

                app.dispatch(Action::Upload(UploadEvent::Reset)).await.unwrap();
                assert_eq!(upload_stage(&app), &UploadStage::Select);
                assert!(upload_stage(&app).checks().is_none());
                assert_eq!(app.mounted().upload().and_then(|u| u.document_type()), Some(kind));
            }
        });
    }
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_pick_stays_on_select() -> Result<()> {
    let fixture = TestFixture::new().with_cancelled_picker();
    let mut app = fixture.signed_in_app().await?;
    upload_passport(&mut app, UploadEvent::ChooseFile).await?;

    assert_eq!(upload_stage(&app), &UploadStage::Select);
    assert_eq!(app.pending_timers(), 0);
    assert_eq!(app.next_timer().await?, None);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_leaving_upload_cancels_validation() -> Result<()> {
    let fixture = TestFixture::new();
    let mut app = fixture.signed_in_app().await?;
    upload_passport(&mut app, UploadEvent::ChooseFile).await?;
    assert_eq!(app.pending_timers(), 1);

    app.dispatch(Action::Tab(NavTab::Help)).await?;
    assert_eq!(app.pending_timers(), 0);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(app.run_until_idle().await?, 0);
    assert_eq!(fixture.validator.calls(), 0);

    // Coming back mounts a fresh upload screen.
    app.navigate(Screen::Upload).await?;
    assert_eq!(upload_stage(&app), &UploadStage::Select);
    assert_eq!(app.mounted().upload().and_then(|u| u.document_type()), None);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_saved_document_shows_in_wallet() -> Result<()> {
    let fixture = TestFixture::new();
    let mut app = fixture.signed_in_app().await?;
    upload_passport(&mut app, UploadEvent::ChooseFile).await?;
    app.run_until_idle().await?;
    app.dispatch(Action::Upload(UploadEvent::SaveToWallet)).await?;

    app.dispatch(Action::Tab(NavTab::Wallet)).await?;
    app.dispatch(Action::Wallet(WalletEvent::EnterPin("1234".into()))).await?;
    app.dispatch(Action::Wallet(WalletEvent::Unlock)).await?;
    let wallet = app.mounted().wallet().expect("wallet mounted");
    assert!(wallet.is_unlocked());
    assert_eq!(wallet.totals().documents, 17);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Wallet, share, help
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_wallet_pin_gate() -> Result<()> {
    let mut app = TestFixture::new().signed_in_app().await?;
    app.navigate(Screen::Wallet).await?;

    app.dispatch(Action::Wallet(WalletEvent::EnterPin("0000".into()))).await?;
    app.dispatch(Action::Wallet(WalletEvent::Unlock)).await?;
    let wallet = app.mounted().wallet().expect("wallet mounted");
    assert!(!wallet.is_unlocked());
    assert!(wallet.categories().is_none());

    app.dispatch(Action::Wallet(WalletEvent::EnterPin("123456".into()))).await?;
    app.dispatch(Action::Wallet(WalletEvent::Unlock)).await?;
    assert!(app.mounted().wallet().is_some_and(|w| w.is_unlocked()));

    // Leaving locks it again.
    app.navigate(Screen::Help).await?;
    app.navigate(Screen::Wallet).await?;
    assert!(app.mounted().wallet().is_some_and(|w| !w.is_unlocked()));
    Ok(())
}

#[tokio::test]
async fn test_share_search_and_upload_remaining() -> Result<()> {
    let mut app = TestFixture::new().signed_in_app().await?;
    app.dispatch(Action::Tab(NavTab::Share)).await?;
    app.dispatch(Action::Share(ShareEvent::SetQuery("HSBC".into()))).await?;

    let share = app.mounted().share().expect("share mounted");
    let hits = share.filtered();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|b| b.name.to_lowercase().contains("hsbc")
        || b.country.to_lowercase().contains("hsbc")));

    let bank = hits[0].id;
    assert_eq!(bank.as_str(), "hsbc");
    app.dispatch(Action::Share(ShareEvent::UploadRemaining(bank))).await?;
    assert_eq!(app.screen(), Screen::Upload);
    Ok(())
}

#[tokio::test]
async fn test_finished_application_has_nothing_to_upload() -> Result<()> {
    let mut app = TestFixture::new().signed_in_app().await?;
    app.dispatch(Action::Tab(NavTab::Share)).await?;
    app.dispatch(Action::Share(ShareEvent::UploadRemaining(nour::core::BankId("adcb")))).await?;
    assert_eq!(app.screen(), Screen::Share);
    Ok(())
}

proptest! {
    #[test]
    fn test_search_filters_and_partitions(query in generators::search_query()) {
        block_on_paused(async move {
            let mut app = TestFixture::new().signed_in_app().await.unwrap();
            app.dispatch(Action::Tab(NavTab::Share)).await.unwrap();
            app.dispatch(Action::Share(ShareEvent::SetQuery(query.clone()))).await.unwrap();

            let share = app.mounted().share().expect("share mounted");
            let hits = share.filtered();
            assert!(hits.iter().all(|b| any_contains([b.name, b.country], &query)));
            assert_eq!(share.partition().len(), hits.len());
        });
    }

    #[test]
    fn test_wallet_opens_only_on_the_pin(entry in generators::pin_entry()) {
        block_on_paused(async move {
            let mut app = TestFixture::new().signed_in_app().await.unwrap();
            app.dispatch(Action::Tab(NavTab::Wallet)).await.unwrap();
            app.dispatch(Action::Wallet(WalletEvent::EnterPin(entry.clone()))).await.unwrap();
            app.dispatch(Action::Wallet(WalletEvent::Unlock)).await.unwrap();

            let wallet = app.mounted().wallet().expect("wallet mounted");
            assert_eq!(wallet.is_unlocked(), entry.starts_with("1234"));
            assert_eq!(wallet.categories().is_some(), wallet.is_unlocked());
        });
    }
}

#[tokio::test]
async fn test_help_language_switch() -> Result<()> {
    let mut app = TestFixture::new().signed_in_app().await?;
    app.navigate(Screen::Help).await?;
    app.dispatch(Action::Help(HelpEvent::ToggleFaq(1))).await?;
    app.dispatch(Action::Help(HelpEvent::SetLanguage(nour::core::Language::Hi))).await?;

    let help = app.mounted().help().expect("help mounted");
    assert_eq!(help.expanded(), None);
    assert_eq!(help.results().len(), 3);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Timed sequences
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_enbd_runs_to_completion_and_finishes() -> Result<()> {
    let mut app = TestFixture::new().signed_in_app().await?;
    app.dispatch(Action::Dashboard(DashboardEvent::OpenTodo(3))).await?;
    assert_eq!(app.screen(), Screen::EnbdIntegration);
    assert!(app.bottom_nav().is_none());

    app.dispatch(Action::Enbd(EnbdEvent::Finish)).await?;
    assert_eq!(app.screen(), Screen::EnbdIntegration);

    let started = tokio::time::Instant::now();
    assert_eq!(app.run_until_idle().await?, 5);
    assert!(started.elapsed() >= Duration::from_millis(7000));
    assert!(app.mounted().enbd().is_some_and(|e| e.is_complete()));

    app.dispatch(Action::Enbd(EnbdEvent::Finish)).await?;
    assert_eq!(app.screen(), Screen::Dashboard);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_leaving_enbd_mid_sequence() -> Result<()> {
    let mut app = TestFixture::new().signed_in_app().await?;
    app.navigate(Screen::EnbdIntegration).await?;
    assert_eq!(app.next_timer().await?, Some(TimerKey::EnbdStep(0)));

    app.navigate(Screen::Dashboard).await?;
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(app.run_until_idle().await?, 0);

    // A remount starts over from the first step.
    app.navigate(Screen::EnbdIntegration).await?;
    assert_eq!(app.mounted().enbd().map(|e| e.completed()), Some(0));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_transfer_ticks_to_confirm() -> Result<()> {
    let mut app = TestFixture::new().signed_in_app().await?;
    app.navigate(Screen::Home).await?;
    app.dispatch(Action::Home(nour::flows::HomeEvent::Send)).await?;
    assert_eq!(app.screen(), Screen::Transfer);

    app.dispatch(Action::Transfer(TransferEvent::SetAmount("250".into()))).await?;
    let quote = app.mounted().transfer().and_then(|t| t.quote()).expect("quote");
    assert!((quote.converted - 917.5).abs() < 1e-9);

    app.dispatch(Action::Transfer(TransferEvent::Transfer)).await?;
    assert!(app.mounted().transfer().is_some_and(|t| t.is_processing()));
    assert_eq!(app.run_until_idle().await?, 3);

    let transfer = app.mounted().transfer().expect("transfer mounted");
    assert!(transfer.is_confirmed());
    assert!(!transfer.can_transfer());
    assert_eq!(app.pending_timers(), 0);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_config_file_drives_timings() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nour.json");
    std::fs::write(&path, r#"{ "validation_delay_ms": 50, "wallet_pin": "4321" }"#)?;

    let config = AppConfig::from_file(&path)?;
    let fixture = TestFixture::new().with_config(config);
    let mut app = fixture.signed_in_app().await?;
    upload_passport(&mut app, UploadEvent::ChooseFile).await?;

    let started = tokio::time::Instant::now();
    app.run_until_idle().await?;
    assert!(started.elapsed() < Duration::from_millis(2000));

    app.navigate(Screen::Wallet).await?;
    app.dispatch(Action::Wallet(WalletEvent::EnterPin("4321".into()))).await?;
    app.dispatch(Action::Wallet(WalletEvent::Unlock)).await?;
    assert!(app.mounted().wallet().is_some_and(|w| w.is_unlocked()));
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, nour::AppError::Config(_)));
}
