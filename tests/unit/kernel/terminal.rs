use super::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

#[derive(Debug, Default)]
struct Record {
    created: usize,
    disposed: usize,
    output: String,
    fits: Vec<HostSize>,
    last_options: Option<TerminalOptions>,
}

#[derive(Default, Clone)]
struct FakeHost {
    record: Rc<RefCell<Record>>,
}

struct FakeSurface {
    record: Rc<RefCell<Record>>,
}

impl TerminalSink for FakeSurface {
    fn write(&mut self, text: &str) {
        self.record.borrow_mut().output.push_str(text);
    }
}

impl TerminalSurface for FakeSurface {
    fn fit(&mut self, host: HostSize) -> Result<GridSize, FitError> {
        self.record.borrow_mut().fits.push(host);
        if host.is_empty() {
            return Err(FitError::ZeroSize {
                width: host.width,
                height: host.height,
            });
        }
        Ok(GridSize {
            cols: host.width,
            rows: host.height,
        })
    }

    fn dispose(&mut self) {
        self.record.borrow_mut().disposed += 1;
    }

    fn visible_rows(&self) -> Vec<String> {
        self.record
            .borrow()
            .output
            .split("\r\n")
            .map(str::to_string)
            .collect()
    }
}

impl TerminalHost for FakeHost {
    type Surface = FakeSurface;

    fn create(&mut self, options: &TerminalOptions) -> FakeSurface {
        let mut record = self.record.borrow_mut();
        record.created += 1;
        record.last_options = Some(options.clone());
        FakeSurface {
            record: self.record.clone(),
        }
    }
}

fn manager() -> (TerminalSessionManager<FakeHost>, Rc<RefCell<Record>>) {
    let host = FakeHost::default();
    let record = host.record.clone();
    (TerminalSessionManager::new(host), record)
}

fn options() -> TerminalOptions {
    TerminalOptions::for_theme(ThemeName::Dark, "$ ")
}

fn run_frame(mgr: &mut TerminalSessionManager<FakeHost>, sched: &mut Scheduler) -> usize {
    let mut fits = 0;
    for (handle, task) in sched.take_frame_callbacks() {
        assert_eq!(task, ScheduledTask::FitTerminal);
        mgr.run_fit(handle);
        fits += 1;
    }
    fits
}

#[test]
fn acquire_creates_single_instance_with_theme_colors() {
    let (mut mgr, record) = manager();
    assert!(mgr.acquire(options()));
    assert!(!mgr.acquire(options()));

    let record = record.borrow();
    assert_eq!(record.created, 1);
    let opts = record.last_options.as_ref().unwrap();
    assert_eq!(opts.background, profile(ThemeName::Dark).terminal_bg);
    assert_eq!(opts.foreground, profile(ThemeName::Dark).terminal_fg);
    assert!(opts.cursor_blink);
    assert!(opts.echo);
    assert_eq!(record.output, format!("{TERMINAL_GREETING}\r\n$ "));

    let session = mgr.session().unwrap();
    assert_eq!(session.addons(), &[TerminalAddon::Fit, TerminalAddon::WebLinks]);
    assert_eq!(mgr.live_observers(), 1);
}

#[test]
fn resize_burst_coalesces_into_one_fit() {
    let (mut mgr, record) = manager();
    let mut sched = Scheduler::new();
    let now = Instant::now();
    mgr.acquire(options());

    for w in 10..20 {
        assert!(mgr.observe_host_size(HostSize::new(w, 5), &mut sched, now));
    }
    assert_eq!(sched.pending_frames(), 1);
    assert!(mgr.has_pending_fit(&sched));

    assert_eq!(run_frame(&mut mgr, &mut sched), 1);
    assert_eq!(record.borrow().fits, vec![HostSize::new(19, 5)]);
    assert_eq!(
        mgr.session().unwrap().grid(),
        Some(GridSize { cols: 19, rows: 5 })
    );
    assert!(!mgr.has_pending_fit(&sched));
}

#[test]
fn unchanged_size_does_not_schedule() {
    let (mut mgr, _) = manager();
    let mut sched = Scheduler::new();
    let now = Instant::now();
    mgr.acquire(options());

    assert!(mgr.observe_host_size(HostSize::new(40, 10), &mut sched, now));
    run_frame(&mut mgr, &mut sched);
    assert!(!mgr.observe_host_size(HostSize::new(40, 10), &mut sched, now));
    assert_eq!(sched.pending(), 0);
}

#[test]
fn zero_size_fit_is_skipped_and_retried_on_next_resize() {
    let (mut mgr, record) = manager();
    let mut sched = Scheduler::new();
    let now = Instant::now();
    mgr.acquire(options());

    mgr.observe_host_size(HostSize::new(0, 0), &mut sched, now);
    run_frame(&mut mgr, &mut sched);
    assert_eq!(mgr.session().unwrap().grid(), None);
    assert_eq!(sched.pending(), 0);

    mgr.observe_host_size(HostSize::new(30, 8), &mut sched, now);
    run_frame(&mut mgr, &mut sched);
    assert_eq!(
        mgr.session().unwrap().grid(),
        Some(GridSize { cols: 30, rows: 8 })
    );
    assert_eq!(record.borrow().fits.len(), 2);
}

#[test]
fn observe_without_session_is_ignored() {
    let (mut mgr, _) = manager();
    let mut sched = Scheduler::new();
    assert!(!mgr.observe_host_size(HostSize::new(10, 10), &mut sched, Instant::now()));
    assert_eq!(sched.pending(), 0);
}

#[test]
fn release_leaves_nothing_behind() {
    let (mut mgr, record) = manager();
    let mut sched = Scheduler::new();
    mgr.acquire(options());
    mgr.observe_host_size(HostSize::new(10, 4), &mut sched, Instant::now());
    assert!(mgr.has_pending_fit(&sched));

    assert!(mgr.release(&mut sched));
    assert!(!mgr.is_active());
    assert_eq!(mgr.live_observers(), 0);
    assert!(!mgr.has_pending_fit(&sched));
    assert_eq!(sched.pending(), 0);
    assert_eq!(record.borrow().disposed, 1);

    assert!(!mgr.release(&mut sched));
    assert_eq!(record.borrow().disposed, 1);
}

#[test]
fn stale_fit_after_release_and_reacquire_is_ignored() {
    let (mut mgr, record) = manager();
    let mut sched = Scheduler::new();
    let now = Instant::now();
    mgr.acquire(options());
    mgr.observe_host_size(HostSize::new(10, 4), &mut sched, now);
    let stale = sched.take_frame_callbacks();
    mgr.release(&mut sched);
    mgr.acquire(options());

    for (handle, _) in stale {
        assert!(!mgr.run_fit(handle));
    }
    assert!(record.borrow().fits.is_empty());
    assert_eq!(record.borrow().created, 2);
}

#[test]
fn echo_writes_plain_characters_and_prompt_on_enter() {
    let (mut mgr, record) = manager();
    mgr.acquire(options());
    record.borrow_mut().output.clear();

    assert!(mgr.handle_key(&TermKey::char('l')));
    assert!(mgr.handle_key(&TermKey::char('s')));
    assert!(mgr.handle_key(&TermKey::new(TermKeyCode::Enter)));

    assert_eq!(record.borrow().output, "ls\r\n$ ");
}

#[test]
fn echo_ignores_modified_and_non_character_keys() {
    let (mut mgr, record) = manager();
    mgr.acquire(options());
    record.borrow_mut().output.clear();

    let ctrl = TermModifiers {
        ctrl: true,
        ..TermModifiers::default()
    };
    let alt = TermModifiers {
        alt: true,
        ..TermModifiers::default()
    };
    let meta = TermModifiers {
        meta: true,
        ..TermModifiers::default()
    };
    assert!(!mgr.handle_key(&TermKey::with_modifiers(TermKeyCode::Char('c'), ctrl)));
    assert!(!mgr.handle_key(&TermKey::with_modifiers(TermKeyCode::Char('x'), alt)));
    assert!(!mgr.handle_key(&TermKey::with_modifiers(TermKeyCode::Enter, meta)));
    assert!(!mgr.handle_key(&TermKey::new(TermKeyCode::Backspace)));
    assert!(!mgr.handle_key(&TermKey::new(TermKeyCode::Escape)));
    assert_eq!(record.borrow().output, "");

    let shift = TermModifiers {
        shift: true,
        ..TermModifiers::default()
    };
    assert!(mgr.handle_key(&TermKey::with_modifiers(TermKeyCode::Char('A'), shift)));
    assert_eq!(record.borrow().output, "A");
}

#[test]
fn keys_without_session_do_nothing() {
    let (mut mgr, _) = manager();
    assert!(!mgr.handle_key(&TermKey::char('a')));
}

#[test]
fn echo_for_key_is_stateless() {
    assert_eq!(
        echo_for_key(&TermKey::new(TermKeyCode::Enter), "> ").as_deref(),
        Some("\r\n> ")
    );
    assert_eq!(
        echo_for_key(&TermKey::new(TermKeyCode::Tab), "> ").as_deref(),
        Some("\t")
    );
    assert_eq!(echo_for_key(&TermKey::new(TermKeyCode::Other), "> "), None);
}

#[test]
fn session_is_a_terminal_sink() {
    let (mut mgr, record) = manager();
    mgr.acquire(options());
    record.borrow_mut().output.clear();

    let session = mgr.session_mut().unwrap();
    session.write_line("hello");
    session.write("$ ");
    assert_eq!(record.borrow().output, "hello\r\n$ ");
}
