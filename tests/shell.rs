use std::sync::{Arc, Mutex};

use lashell::{
    Diagram, EventController, EventFilter, EventKind, MainShell, MenuId, ScreenPos, ShellConfig,
    ShellError, StatusBar,
};

#[derive(Clone, Default)]
struct DiagramLog(Arc<Mutex<Vec<String>>>);

impl DiagramLog {
    fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

struct FakeDiagram {
    log: DiagramLog,
    scale: f64,
}

impl Diagram for FakeDiagram {
    fn convert_point_to_sample_index(&self, pos: ScreenPos) -> u64 {
        pos.x as u64 * 10
    }
    fn goto_position(&mut self, sample: u64) {
        self.log.0.lock().unwrap().push(format!("goto {sample}"));
    }
    fn zoom_in(&mut self) {
        self.log.0.lock().unwrap().push("zoom_in".into());
    }
    fn zoom_out(&mut self) {
        self.log.0.lock().unwrap().push("zoom_out".into());
    }
    fn zoom_to_fit(&mut self) {
        self.log.0.lock().unwrap().push("zoom_to_fit".into());
    }
    fn zoom_default(&mut self) {
        self.log.0.lock().unwrap().push("zoom_default".into());
    }
    fn zoom_scale(&self) -> f64 {
        self.scale
    }
}

#[derive(Default)]
struct StatusState {
    text: String,
    progress: Option<u8>,
    bar_visible: bool,
}

#[derive(Clone, Default)]
struct FakeStatus(Arc<Mutex<StatusState>>);

impl StatusBar for FakeStatus {
    fn set_text(&mut self, text: &str) {
        self.0.lock().unwrap().text = text.to_string();
    }
    fn set_progress(&mut self, percent: u8) {
        self.0.lock().unwrap().progress = Some(percent);
    }
    fn show_progress_bar(&mut self, visible: bool) {
        self.0.lock().unwrap().bar_visible = visible;
    }
}

fn shell_with(config: ShellConfig) -> (MainShell, DiagramLog, FakeStatus) {
    let log = DiagramLog::default();
    let status = FakeStatus::default();
    let diagram = FakeDiagram {
        log: log.clone(),
        scale: 2.5,
    };
    let shell = MainShell::new(config, Box::new(diagram), Box::new(status.clone()));
    (shell, log, status)
}

fn shell() -> (MainShell, DiagramLog, FakeStatus) {
    shell_with(ShellConfig::default())
}

#[test]
fn registries_start_with_configured_placeholders() {
    let (shell, _, _) = shell();
    assert_eq!(shell.devices().list()[0].name, "No Devices.");
    assert_eq!(shell.tools().list()[0].name, "No Tools.");
    assert_eq!(shell.title(), "Logic Analyzer");
}

#[test]
fn blank_names_are_rejected_before_any_mutation() {
    let (mut shell, _, _) = shell();
    for name in ["", "   ", "\t\n"] {
        assert!(matches!(
            shell.register_device(name),
            Err(ShellError::InvalidArgument(_))
        ));
        assert!(matches!(
            shell.register_tool(name),
            Err(ShellError::InvalidArgument(_))
        ));
        assert!(matches!(
            shell.unregister_device(name),
            Err(ShellError::InvalidArgument(_))
        ));
    }
    assert!(shell.devices().is_empty());
    assert!(shell.tools().is_empty());
}

#[test]
fn registration_delegates_to_the_matching_registry() {
    let (mut shell, _, _) = shell();
    shell.register_device("SUMP").unwrap();
    shell.register_tool("SPI Decoder").unwrap();

    assert!(shell.devices().contains("SUMP"));
    assert!(shell.tools().contains("SPI Decoder"));
    assert!(!shell.devices().contains("SPI Decoder"));
}

#[test]
fn registry_errors_propagate_unchanged() {
    let (mut shell, _, _) = shell();
    shell.register_device("SUMP").unwrap();
    assert!(matches!(
        shell.register_device("SUMP"),
        Err(ShellError::DuplicateName { .. })
    ));
    assert!(matches!(
        shell.unregister_tool("ghost"),
        Err(ShellError::NotFound { .. })
    ));
}

#[test]
fn select_device_routes_to_the_device_registry() {
    let (mut shell, _, _) = shell();
    shell.register_device("SUMP").unwrap();
    shell.register_device("BusPirate").unwrap();

    shell.select_device("BusPirate").unwrap();
    assert_eq!(shell.devices().selected(), Some("BusPirate"));
}

#[test]
fn navigation_and_zoom_delegate_to_the_diagram() {
    let (mut shell, log, _) = shell();
    shell.navigate_to(1024);
    shell.zoom_in();
    shell.zoom_out();
    shell.zoom_to_fit();
    shell.zoom_to_default();

    assert_eq!(
        log.calls(),
        ["goto 1024", "zoom_in", "zoom_out", "zoom_to_fit", "zoom_default"]
    );
    assert_eq!(shell.zoom_scale(), 2.5);
}

#[test]
fn point_conversion_delegates_to_the_diagram() {
    let (shell, _, _) = shell();
    let sample = shell.convert_point_to_sample_index(ScreenPos { x: 12.0, y: 3.0 });
    assert_eq!(sample, 120);
}

#[test]
fn report_progress_shows_the_bar() {
    let (mut shell, _, status) = shell();
    shell.report_progress(42).unwrap();

    let state = status.0.lock().unwrap();
    assert_eq!(state.progress, Some(42));
    assert!(state.bar_visible);
}

#[test]
fn out_of_range_progress_is_rejected() {
    let (mut shell, _, status) = shell();
    assert!(matches!(
        shell.report_progress(101),
        Err(ShellError::InvalidArgument(_))
    ));
    assert_eq!(status.0.lock().unwrap().progress, None);
}

#[test]
fn status_message_is_formatted_and_hides_the_bar() {
    let (mut shell, _, status) = shell();
    shell.report_progress(80).unwrap();
    shell
        .set_status_message("Loaded {0} samples", &[&42])
        .unwrap();

    let state = status.0.lock().unwrap();
    assert_eq!(state.text, "Loaded 42 samples");
    assert!(!state.bar_visible);
}

#[test]
fn failed_status_format_leaves_the_status_bar_untouched() {
    let (mut shell, _, status) = shell();
    shell.set_status_message("Ready", &[]).unwrap();
    shell.report_progress(10).unwrap();

    let err = shell.set_status_message("Loaded {0}", &[]).unwrap_err();
    assert!(matches!(err, ShellError::Format { .. }));

    let state = status.0.lock().unwrap();
    assert_eq!(state.text, "Ready");
    assert!(state.bar_visible);
}

#[test]
fn registration_emits_change_notifications() {
    let events = EventController::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    events.subscribe(
        EventFilter::only(EventKind::ENTRY_ADDED | EventKind::ENTRY_REMOVED),
        move |e| sink.lock().unwrap().push(e.clone()),
    );

    let config = ShellConfig {
        events: Some(events),
        ..ShellConfig::default()
    };
    let (mut shell, _, _) = shell_with(config);

    shell.register_device("SUMP").unwrap();
    shell.unregister_device("SUMP").unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);

    // First device ever: the add is also a selection change.
    assert!(seen[0].kinds.contains(EventKind::ENTRY_ADDED));
    assert!(seen[0].kinds.contains(EventKind::SELECTION_CHANGED));
    assert_eq!(seen[0].menu, Some(MenuId::Devices));
    assert_eq!(seen[0].entry.as_deref(), Some("SUMP"));
    assert_eq!(seen[0].selected.as_deref(), Some("SUMP"));

    // Removing the selected device clears the selection.
    assert!(seen[1].kinds.contains(EventKind::ENTRY_REMOVED));
    assert!(seen[1].kinds.contains(EventKind::SELECTION_CHANGED));
    assert_eq!(seen[1].selected, None);
}

#[test]
fn view_and_status_events_carry_metadata() {
    let (mut shell, _, _) = shell();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    shell
        .events()
        .subscribe_all(move |e| sink.lock().unwrap().push(e.clone()));

    shell.navigate_to(77);
    shell.report_progress(50).unwrap();
    shell.set_status_message("Done", &[]).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(seen[0].kinds.contains(EventKind::NAVIGATE));
    assert_eq!(seen[0].sample, Some(77));
    assert!(seen[1].kinds.contains(EventKind::PROGRESS_CHANGED));
    assert_eq!(seen[1].progress, Some(50));
    assert!(seen[2].kinds.contains(EventKind::STATUS_CHANGED));
    assert_eq!(seen[2].message.as_deref(), Some("Done"));
}
