//! End-to-end runs of the registration generator against scripted answers.

use asreg_adapters::{MemoryFilesystem, RecordingConsole, ScriptedInput};
use asreg_core::{
    application::{
        ApplicationError, CancelStage, GenerateRequest, GeneratedDocuments, GenerationOutcome,
        RegistrationGenerator, Tone, services::PatternCompiler,
    },
    domain::{Config, DomainError, NamespaceKind, Registration, compile_pattern},
    error::{AsregError, AsregResult},
};
use regex::Regex;
use std::io;
use std::sync::{Arc, Mutex};

struct Run {
    result: AsregResult<GenerationOutcome>,
    console: RecordingConsole,
    fs: MemoryFilesystem,
}

fn run_with<S: AsRef<str>>(
    answers: &[S],
    request: GenerateRequest,
    fs: MemoryFilesystem,
    compile: Option<PatternCompiler>,
) -> Run {
    let console = RecordingConsole::new();
    let input = ScriptedInput::new(answers.iter().map(|a| a.as_ref().to_owned()));
    let mut generator = RegistrationGenerator::new(
        Box::new(input),
        Box::new(console.clone()),
        Box::new(fs.clone()),
    );
    if let Some(compile) = compile {
        generator = generator.with_pattern_compiler(compile);
    }
    let result = generator.generate(&request);
    Run {
        result,
        console,
        fs,
    }
}

fn run<S: AsRef<str>>(answers: &[S], request: GenerateRequest) -> Run {
    run_with(answers, request, MemoryFilesystem::new(), None)
}

fn request() -> GenerateRequest {
    GenerateRequest::new("appservice", "bot")
}

/// name, bot, protocol, hostname, port, homeserver url, domain, log dir
const HTTP_ANSWERS: [&str; 8] = [
    "myapp",
    "botuser",
    "http",
    "localhost",
    "29313",
    "http://localhost:8008",
    "example.com",
    "./logs",
];

fn answers(head: &[&str], tail: &[&str]) -> Vec<String> {
    head.iter().chain(tail).map(|s| s.to_string()).collect()
}

fn completed(run: &Run) -> &GeneratedDocuments {
    match &run.result {
        Ok(GenerationOutcome::Completed(docs)) => docs,
        other => panic!("expected completed run, got {other:?}"),
    }
}

fn prefix_prompts(run: &Run) -> usize {
    run.console
        .prompts()
        .iter()
        .filter(|p| *p == "Enter namespace prefix")
        .count()
}

// ── end-to-end ────────────────────────────────────────────────────────────────

#[test]
fn http_run_writes_both_documents() {
    let script = answers(&HTTP_ANSWERS, &["yes", "reg.yaml", "yes", "cfg.yaml"]);
    let run = run(&script, request());
    let docs = completed(&run);

    assert_eq!(docs.registration_path, "reg.yaml");
    assert_eq!(docs.config_path, "cfg.yaml");

    let registration = Registration::from_yaml(&run.fs.read_file("reg.yaml").unwrap()).unwrap();
    assert_eq!(registration.id, "myapp");
    assert_eq!(registration.url, "http://localhost:29313");
    assert_eq!(registration.sender_localpart, "botuser");
    assert!(!registration.rate_limited);
    assert!(registration.namespaces.is_empty());
    assert_eq!(registration, docs.registration);

    let config = Config::from_yaml(&run.fs.read_file("cfg.yaml").unwrap()).unwrap();
    assert_eq!(config.host.hostname, "localhost");
    assert_eq!(config.host.port, 29313);
    assert_eq!(config.host.tls_cert, None);
    assert_eq!(config.host.tls_key, None);
    assert_eq!(config.homeserver_url, "http://localhost:8008");
    assert_eq!(config.homeserver_domain, "example.com");
    assert_eq!(config.log_config.directory, "./logs");
    assert_eq!(config.registration_path, "reg.yaml");
    assert_eq!(config, docs.config);

    assert!(run.fs.has_directory("./logs"));
    assert_eq!(run.console.prompts().len(), 12);
}

#[test]
fn pressing_enter_everywhere_uses_defaults() {
    let script = vec![""; 12];
    let run = run(&script, GenerateRequest::new("bridge", "bridgebot"));
    let docs = completed(&run);

    assert_eq!(docs.registration.id, "bridge");
    assert_eq!(docs.registration.sender_localpart, "bridgebot");
    assert_eq!(docs.registration.url, "http://localhost:29313");
    assert_eq!(docs.registration_path, "registration.yaml");
    assert_eq!(docs.config_path, "config.yaml");
    assert_eq!(docs.config.homeserver_url, "http://localhost:8008");
    assert_eq!(docs.config.homeserver_domain, "example.com");
    assert_eq!(docs.config.registration_path, "registration.yaml");
    assert!(run.fs.read_file("registration.yaml").is_some());
    assert!(run.fs.read_file("config.yaml").is_some());
}

#[test]
fn prompts_follow_the_fixed_order() {
    let script = answers(&HTTP_ANSWERS, &["y", "reg.yaml", "Y", "cfg.yaml"]);
    let run = run(&script, request());
    completed(&run);

    assert_eq!(
        run.console.prompts(),
        vec![
            "Enter name for appservice",
            "Enter bot username",
            "Enter appservice host protocol",
            "Enter appservice hostname",
            "Enter appservice host port",
            "Enter homeserver address",
            "Enter homeserver domain",
            "Enter directory for logs",
            "Does the registration look OK [yes/no]?",
            "Where should the registration be saved?",
            "Does the config look OK [yes/no]?",
            "Where should the config be saved?",
        ]
    );
    assert_eq!(
        run.console.texts(Tone::Success),
        vec!["Registration saved.", "Config saved."]
    );
}

#[test]
fn previews_show_yaml_before_each_checkpoint() {
    let script = answers(&HTTP_ANSWERS, &["yes", "reg.yaml", "yes", "cfg.yaml"]);
    let run = run(&script, request());
    completed(&run);

    let previews = run.console.texts(Tone::Preview);
    assert_eq!(previews.len(), 2);
    assert!(previews[0].contains("url: http://localhost:29313"));
    assert!(previews[1].contains("registration: reg.yaml"));

    let headers = run.console.texts(Tone::Emphasis);
    assert!(headers.iter().any(|h| h.contains("Registration generated")));
    assert!(headers.iter().any(|h| h.contains("Config generated")));
}

// ── TLS branch ───────────────────────────────────────────────────────────────

#[test]
fn https_with_ssl_collects_tls_paths() {
    let script = [
        "myapp", "botuser", "https", "yes", "/etc/as.crt", "/etc/as.key", "as.example.com",
        "443", "", "", "", "yes", "", "yes", "",
    ];
    let run = run(&script, request());
    let docs = completed(&run);

    assert_eq!(docs.registration.url, "https://as.example.com:443");
    assert_eq!(docs.config.host.tls_cert.as_deref(), Some("/etc/as.crt"));
    assert_eq!(docs.config.host.tls_key.as_deref(), Some("/etc/as.key"));
    assert!(
        run.console
            .prompts()
            .contains(&"Enter path to SSL certificate".to_string())
    );
}

#[test]
fn https_ssl_defaults() {
    let script = [
        "myapp", "botuser", "https", "", "", "", "", "", "", "", "", "yes", "", "yes", "",
    ];
    let run = run(&script, request());
    let docs = completed(&run);
    assert_eq!(docs.config.host.tls_cert.as_deref(), Some("appservice.crt"));
    assert_eq!(docs.config.host.tls_key.as_deref(), Some("appservice.key"));
}

#[test]
fn https_ssl_answer_y_does_not_enable_tls() {
    // The SSL question accepts only "yes"; the checkpoints also accept "y".
    let script = [
        "myapp", "botuser", "https", "y", "", "", "", "", "", "yes", "", "yes", "",
    ];
    let run = run(&script, request());
    let docs = completed(&run);
    assert_eq!(docs.config.host.tls_cert, None);
    assert_eq!(docs.registration.url, "https://localhost:29313");
}

#[test]
fn http_never_asks_about_tls() {
    let script = answers(&HTTP_ANSWERS, &["yes", "", "yes", ""]);
    let run = run(&script, request());
    let docs = completed(&run);

    assert!(!run.console.prompts().iter().any(|p| p.contains("SSL")));
    assert!(!docs.config.host.has_tls());
}

// ── port ─────────────────────────────────────────────────────────────────────

#[test]
fn bad_port_aborts_before_anything_is_written() {
    for bad in ["http", "65536", "-1", "29313 ", "0x50"] {
        let script = ["myapp", "botuser", "http", "localhost", bad, "", "", "", "yes"];
        let run = run(&script, request());

        assert!(
            matches!(
                run.result,
                Err(AsregError::Domain(DomainError::InvalidPort { .. }))
            ),
            "port {bad:?} was accepted"
        );
        assert!(run.fs.list_files().is_empty());
        // nothing after the port question was asked
        assert_eq!(
            run.console.prompts().last().map(String::as_str),
            Some("Enter appservice host port")
        );
    }
}

// ── namespaces ───────────────────────────────────────────────────────────────

#[test]
fn room_reservation_only_registers_aliases() {
    let script = answers(&HTTP_ANSWERS, &["_irc_", "yes", "", "yes", ""]);
    let run = run(&script, request().reserve_rooms(true));
    let docs = completed(&run);

    assert_eq!(prefix_prompts(&run), 1);

    let ns = &docs.registration.namespaces;
    assert_eq!(ns.room_aliases.len(), 1);
    assert_eq!(ns.room_aliases[0].regex, "#_irc_.+:example.com");
    assert!(ns.room_aliases[0].exclusive);
    assert!(ns.user_ids.is_empty());
    assert!(ns.room_ids.is_empty());
}

#[test]
fn user_reservation_only_registers_user_ids() {
    let script = answers(&HTTP_ANSWERS, &["_irc_", "yes", "", "yes", ""]);
    let run = run(&script, request().reserve_users(true));
    let docs = completed(&run);

    let ns = &docs.registration.namespaces;
    assert!(ns.room_aliases.is_empty());
    assert_eq!(ns.user_ids.len(), 1);
    assert_eq!(ns.user_ids[0].regex, "@_irc_.+:example.com");
    assert!(ns.user_ids[0].exclusive);
}

#[test]
fn both_reservations_share_one_prefix() {
    let script = answers(&HTTP_ANSWERS, &["", "yes", "", "yes", ""]);
    let run = run(&script, request().reserve_rooms(true).reserve_users(true));
    let docs = completed(&run);

    // default prefix comes from the entered name, not the request default
    let ns = &docs.registration.namespaces;
    assert_eq!(ns.room_aliases[0].regex, "#_myapp_.+:example.com");
    assert_eq!(ns.user_ids[0].regex, "@_myapp_.+:example.com");
}

#[test]
fn no_reservation_never_asks_for_prefix() {
    let script = answers(&HTTP_ANSWERS, &["yes", "", "yes", ""]);
    let run = run(&script, request());
    completed(&run);
    assert_eq!(prefix_prompts(&run), 0);
}

#[test]
fn broken_room_pattern_reprompts() {
    let script = answers(&HTTP_ANSWERS, &["(oops", "_ok_", "yes", "", "yes", ""]);
    let run = run(&script, request().reserve_rooms(true));
    let docs = completed(&run);

    assert_eq!(prefix_prompts(&run), 2);
    assert_eq!(run.console.texts(Tone::Warning).len(), 1);
    assert_eq!(
        docs.registration.namespaces.room_aliases[0].regex,
        "#_ok_.+:example.com"
    );
}

fn reject_user_patterns(kind: NamespaceKind, pattern: &str) -> Result<Regex, DomainError> {
    if kind == NamespaceKind::UserId {
        return Err(DomainError::InvalidNamespacePattern {
            kind,
            pattern: pattern.to_owned(),
            reason: "rejected".into(),
        });
    }
    compile_pattern(kind, pattern)
}

#[test]
fn broken_user_pattern_aborts_instead_of_reprompting() {
    let script = answers(&HTTP_ANSWERS, &["_irc_", "_other_", "yes", "", "yes", ""]);
    let run = run_with(
        &script,
        request().reserve_rooms(true),
        MemoryFilesystem::new(),
        Some(reject_user_patterns as PatternCompiler),
    );

    // Even with only room reservation requested, the user pattern is still
    // compiled and its failure is fatal.
    assert!(matches!(
        run.result,
        Err(AsregError::Domain(DomainError::InvalidNamespacePattern {
            kind: NamespaceKind::UserId,
            ..
        }))
    ));
    assert_eq!(prefix_prompts(&run), 1);
    assert!(run.fs.list_files().is_empty());
}

// ── checkpoints ──────────────────────────────────────────────────────────────

#[test]
fn declining_registration_writes_nothing() {
    for answer in ["no", "n", "maybe", " ", " yes", "yes please"] {
        let script = answers(&HTTP_ANSWERS, &[answer]);
        let run = run(&script, request());

        assert_eq!(
            run.result.as_ref().unwrap(),
            &GenerationOutcome::Cancelled {
                stage: CancelStage::Registration
            },
            "answer {answer:?} did not cancel"
        );
        assert!(run.fs.list_files().is_empty());
        assert!(run.console.transcript().contains("Cancelling generation."));
    }
}

#[test]
fn declining_config_keeps_saved_registration() {
    let script = answers(&HTTP_ANSWERS, &["YES", "reg.yaml", "nope"]);
    let run = run(&script, request());

    assert_eq!(
        run.result.unwrap(),
        GenerationOutcome::Cancelled {
            stage: CancelStage::Config
        }
    );
    assert!(run.fs.read_file("reg.yaml").is_some());
    assert_eq!(run.fs.list_files().len(), 1);
}

// ── failures ─────────────────────────────────────────────────────────────────

#[test]
fn input_closing_mid_run_aborts() {
    let run = run(&["myapp", "botuser"], request());
    assert!(matches!(
        run.result,
        Err(AsregError::Application(ApplicationError::InputFailed { .. }))
    ));
    assert!(run.fs.list_files().is_empty());
}

#[test]
fn input_error_aborts() {
    let console = RecordingConsole::new();
    let fs = MemoryFilesystem::new();
    let mut generator = RegistrationGenerator::new(
        Box::new(ScriptedInput::new(["myapp"]).fail_when_exhausted()),
        Box::new(console),
        Box::new(fs),
    );
    let err = generator.generate(&request()).unwrap_err();
    assert!(err.to_string().contains("scripted input closed"));
}

#[test]
fn config_save_failure_leaves_registration_on_disk() {
    let fs = MemoryFilesystem::new();
    fs.deny("cfg.yaml");
    let script = answers(&HTTP_ANSWERS, &["yes", "reg.yaml", "yes", "cfg.yaml"]);
    let run = run_with(&script, request(), fs, None);

    assert!(matches!(
        run.result,
        Err(AsregError::Application(
            ApplicationError::FilesystemError { .. }
        ))
    ));
    assert!(run.fs.read_file("reg.yaml").is_some());
    assert!(run.fs.read_file("cfg.yaml").is_none());
}

#[test]
fn registration_save_failure_aborts_before_config() {
    let fs = MemoryFilesystem::new();
    let script = answers(&HTTP_ANSWERS, &["yes", "missing/reg.yaml", "yes", "cfg.yaml"]);
    let run = run_with(&script, request(), fs, None);

    assert!(run.result.is_err());
    assert!(run.fs.list_files().is_empty());
    assert!(
        !run.console
            .prompts()
            .iter()
            .any(|p| p.contains("config look OK"))
    );
}

/// Collects formatted tracing output for the duration of a closure.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    fn during<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

#[test]
fn log_directory_failure_is_ignored() {
    let fs = MemoryFilesystem::new();
    fs.deny("./logs");
    let script = answers(&HTTP_ANSWERS, &["yes", "reg.yaml", "yes", "cfg.yaml"]);

    let logs = LogCapture::default();
    let run = logs.during(|| run_with(&script, request(), fs, None));

    let docs = completed(&run);
    assert_eq!(docs.config.log_config.directory, "./logs");
    assert!(!run.fs.has_directory("./logs"));

    let text = logs.text();
    assert!(text.contains("WARN"), "no warning in: {text}");
    assert!(text.contains("Could not create log directory"));
    assert!(text.contains("./logs"));
}

#[test]
fn successful_run_logs_no_warnings() {
    let script = answers(&HTTP_ANSWERS, &["yes", "reg.yaml", "yes", "cfg.yaml"]);

    let logs = LogCapture::default();
    let run = logs.during(|| run(&script, request()));

    completed(&run);
    assert_eq!(logs.text(), "");
}
