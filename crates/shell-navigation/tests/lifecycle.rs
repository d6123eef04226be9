use std::cell::{Cell, RefCell};
use std::rc::Rc;

use proptest::prelude::*;
use shell_navigation::{
    Event, JournalEntry, LifecycleState, NavigationContext, NavigationError, NavigationJournal,
    NavigationMode, NavigationService, Result, ScreenHooks, ScreenLifecycle,
};

type CallLog = Rc<RefCell<Vec<String>>>;

struct FakeJournal {
    can_go_back: Cell<bool>,
    can_go_forward: Cell<bool>,
    log: CallLog,
}

impl NavigationJournal for FakeJournal {
    fn can_go_back(&self) -> bool {
        self.can_go_back.get()
    }

    fn can_go_forward(&self) -> bool {
        self.can_go_forward.get()
    }

    fn go_back(&self) -> Result<()> {
        self.log.borrow_mut().push("journal.go_back".to_string());
        Ok(())
    }

    fn go_forward(&self) -> Result<()> {
        self.log.borrow_mut().push("journal.go_forward".to_string());
        Ok(())
    }

    fn current_entry(&self) -> Option<JournalEntry> {
        None
    }

    fn clear(&self) {}
}

struct FakeService {
    journal: Rc<FakeJournal>,
    navigated: Event<NavigationContext>,
    log: CallLog,
}

impl FakeService {
    fn new(can_go_back: bool, can_go_forward: bool, log: &CallLog) -> Rc<Self> {
        Rc::new(Self {
            journal: Rc::new(FakeJournal {
                can_go_back: Cell::new(can_go_back),
                can_go_forward: Cell::new(can_go_forward),
                log: Rc::clone(log),
            }),
            navigated: Event::new(),
            log: Rc::clone(log),
        })
    }
}

impl NavigationService for FakeService {
    fn region_name(&self) -> &str {
        "FakeRegion"
    }

    fn request_navigate(&self, destination: &str) -> Result<()> {
        self.log
            .borrow_mut()
            .push(format!("service.request_navigate:{destination}"));
        Ok(())
    }

    fn journal(&self) -> Rc<dyn NavigationJournal> {
        Rc::clone(&self.journal) as Rc<dyn NavigationJournal>
    }

    fn navigated(&self) -> &Event<NavigationContext> {
        &self.navigated
    }
}

struct RecordingHooks {
    log: CallLog,
}

impl ScreenHooks for RecordingHooks {
    fn keep_alive(&self) -> bool {
        true
    }

    fn on_before_navigate(&self, destination: &str) {
        self.log
            .borrow_mut()
            .push(format!("hooks.before_navigate:{destination}"));
    }

    fn on_before_go_back(&self) {
        self.log.borrow_mut().push("hooks.before_go_back".to_string());
    }

    fn on_before_go_forward(&self) {
        self.log
            .borrow_mut()
            .push("hooks.before_go_forward".to_string());
    }
}

fn context_for(service: &Rc<FakeService>) -> NavigationContext {
    let service: Rc<dyn NavigationService> = Rc::clone(service) as Rc<dyn NavigationService>;
    NavigationContext::new(&service, "Screen", NavigationMode::New)
}

/// Counts change notifications per command, in the order they arrive.
fn watch_commands(lifecycle: &ScreenLifecycle) -> CallLog {
    let seen: CallLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    lifecycle
        .navigate_command()
        .can_execute_changed()
        .subscribe(move |_| sink.borrow_mut().push("Navigate".to_string()));
    let sink = Rc::clone(&seen);
    lifecycle
        .go_back_command()
        .can_execute_changed()
        .subscribe(move |_| sink.borrow_mut().push("GoBack".to_string()));
    let sink = Rc::clone(&seen);
    lifecycle
        .go_forward_command()
        .can_execute_changed()
        .subscribe(move |_| sink.borrow_mut().push("GoForward".to_string()));
    seen
}

proptest! {
    #[test]
    fn test_guards_mirror_journal_after_shown(can_go_back: bool, can_go_forward: bool) {
        let log: CallLog = Rc::default();
        let service = FakeService::new(can_go_back, can_go_forward, &log);
        let lifecycle = ScreenLifecycle::new();

        lifecycle.on_shown(&context_for(&service));

        prop_assert_eq!(lifecycle.go_back_command().can_execute(&()), can_go_back);
        prop_assert_eq!(lifecycle.go_forward_command().can_execute(&()), can_go_forward);
        prop_assert!(lifecycle.navigate_command().can_execute("Anywhere"));
    }

    #[test]
    fn test_created_lifecycle_refuses_every_destination(destination in "[A-Za-z]{0,16}") {
        let lifecycle = ScreenLifecycle::new();
        prop_assert!(!lifecycle.navigate_command().can_execute(destination.as_str()));
        prop_assert!(!lifecycle.go_back_command().can_execute(&()));
        prop_assert!(!lifecycle.go_forward_command().can_execute(&()));
    }
}

#[test]
fn test_guards_follow_journal_changes() {
    let log: CallLog = Rc::default();
    let service = FakeService::new(false, false, &log);
    let lifecycle = ScreenLifecycle::new();
    lifecycle.on_shown(&context_for(&service));

    assert!(!lifecycle.go_back_command().can_execute(&()));
    service.journal.can_go_back.set(true);
    assert!(lifecycle.go_back_command().can_execute(&()));
}

#[test]
fn test_navigated_raises_one_notification_per_command() {
    let log: CallLog = Rc::default();
    let service = FakeService::new(true, false, &log);
    let lifecycle = ScreenLifecycle::new();
    let seen = watch_commands(&lifecycle);
    let context = context_for(&service);

    lifecycle.on_shown(&context);
    service.navigated.raise(&context);

    assert_eq!(*seen.borrow(), vec!["Navigate", "GoBack", "GoForward"]);
}

#[test]
fn test_no_notification_after_hidden() {
    let log: CallLog = Rc::default();
    let service = FakeService::new(true, true, &log);
    let lifecycle = ScreenLifecycle::new();
    let seen = watch_commands(&lifecycle);
    let context = context_for(&service);

    lifecycle.on_shown(&context);
    lifecycle.on_hidden(&context);
    service.navigated.raise(&context);

    assert!(seen.borrow().is_empty());
    assert_eq!(service.navigated.subscriber_count(), 0);
    assert_eq!(lifecycle.state(), LifecycleState::Detached);
}

#[test]
fn test_double_shown_notifies_once_per_command() {
    let log: CallLog = Rc::default();
    let service = FakeService::new(false, false, &log);
    let lifecycle = ScreenLifecycle::new();
    let seen = watch_commands(&lifecycle);
    let context = context_for(&service);

    lifecycle.on_shown(&context);
    lifecycle.on_shown(&context);
    service.navigated.raise(&context);

    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn test_reattach_moves_subscription_to_new_service() {
    let log: CallLog = Rc::default();
    let first = FakeService::new(false, false, &log);
    let second = FakeService::new(true, false, &log);
    let lifecycle = ScreenLifecycle::new();
    let seen = watch_commands(&lifecycle);

    lifecycle.on_shown(&context_for(&first));
    lifecycle.on_hidden(&context_for(&first));
    lifecycle.on_shown(&context_for(&second));

    first.navigated.raise(&context_for(&first));
    assert!(seen.borrow().is_empty());

    second.navigated.raise(&context_for(&second));
    assert_eq!(seen.borrow().len(), 3);
    assert!(lifecycle.go_back_command().can_execute(&()));
}

#[test]
fn test_hooks_run_before_collaborator_calls() {
    let log: CallLog = Rc::default();
    let service = FakeService::new(true, true, &log);
    let lifecycle = ScreenLifecycle::with_hooks(RecordingHooks {
        log: Rc::clone(&log),
    });
    lifecycle.on_shown(&context_for(&service));

    lifecycle.navigate_command().execute("Details").unwrap();
    lifecycle.go_back_command().execute(&()).unwrap();
    lifecycle.go_forward_command().execute(&()).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            "hooks.before_navigate:Details",
            "service.request_navigate:Details",
            "hooks.before_go_back",
            "journal.go_back",
            "hooks.before_go_forward",
            "journal.go_forward",
        ]
    );
    assert!(lifecycle.hooks().keep_alive());
}

#[test]
fn test_unavailable_command_never_reaches_collaborators() {
    let log: CallLog = Rc::default();
    let service = FakeService::new(false, false, &log);
    let lifecycle = ScreenLifecycle::with_hooks(RecordingHooks {
        log: Rc::clone(&log),
    });

    assert_eq!(
        lifecycle.navigate_command().execute("Details"),
        Err(NavigationError::CommandUnavailable {
            command: "Navigate"
        })
    );

    lifecycle.on_shown(&context_for(&service));
    assert_eq!(
        lifecycle.go_back_command().execute(&()),
        Err(NavigationError::CommandUnavailable { command: "GoBack" })
    );
    assert!(log.borrow().is_empty());
}
