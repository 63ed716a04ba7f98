//! Form submission controller.
//!
//! A [`FormActionController`] wraps one asynchronous server action. It owns the
//! pending flag and the last [`ActionResult`], and routes every completed
//! submission to exactly one of the `on_success` / `on_error` callbacks.
//!
//! Submissions are serialized per controller: a `submit` issued while another
//! one is still in flight is ignored and reported as [`Submission::Ignored`].

use crate::api::ApiError;
use leptos::*;
use std::{future::Future, pin::Pin, rc::Rc};

const DEFAULT_FAILURE_MESSAGE: &str = "The request could not be completed.";

/// Outcome of a server action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<T> {
    /// Seed value shown before anything has been submitted.
    Idle,
    Ok(T),
    Failed(ApiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Idle,
    Ok,
    Error,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Idle => "idle",
            ActionStatus::Ok => "ok",
            ActionStatus::Error => "error",
        }
    }
}

impl<T> Default for ActionResult<T> {
    fn default() -> Self {
        ActionResult::Idle
    }
}

impl<T> ActionResult<T> {
    /// Builds a failure, substituting a generic message for an empty one.
    pub fn failed(error: ApiError) -> Self {
        if error.error.trim().is_empty() {
            Self::Failed(ApiError {
                error: DEFAULT_FAILURE_MESSAGE.to_string(),
                ..error
            })
        } else {
            Self::Failed(error)
        }
    }

    /// The error message of a failure; an empty one reads as the generic text.
    pub fn error(&self) -> Option<&str> {
        match self {
            ActionResult::Failed(err) if err.error.trim().is_empty() => {
                Some(DEFAULT_FAILURE_MESSAGE)
            }
            ActionResult::Failed(err) => Some(err.error.as_str()),
            _ => None,
        }
    }

    pub fn status(&self) -> ActionStatus {
        match self {
            ActionResult::Idle => ActionStatus::Idle,
            _ if self.is_failure() => ActionStatus::Error,
            _ => ActionStatus::Ok,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ActionResult::Failed(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ActionResult::Ok(value) => Some(value),
            _ => None,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ActionResult::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionResult<U> {
        match self {
            ActionResult::Idle => ActionResult::Idle,
            ActionResult::Ok(value) => ActionResult::Ok(f(value)),
            ActionResult::Failed(err) => ActionResult::Failed(err),
        }
    }
}

impl<T> From<Result<T, ApiError>> for ActionResult<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => ActionResult::Ok(value),
            Err(err) => ActionResult::failed(err),
        }
    }
}

/// Pending flag and result, written together so readers never see one
/// without the other.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSnapshot<T> {
    pub pending: bool,
    pub result: ActionResult<T>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    Completed(ActionResult<T>),
    /// Another submission was already in flight.
    Ignored,
}

impl<T> Submission<T> {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Submission::Ignored)
    }

    pub fn into_result(self) -> Option<ActionResult<T>> {
        match self {
            Submission::Completed(result) => Some(result),
            Submission::Ignored => None,
        }
    }
}

type ActionFuture<T> = Pin<Box<dyn Future<Output = ActionResult<T>>>>;
type BoxedAction<F, T> = Rc<dyn Fn(ActionResult<T>, F) -> ActionFuture<T>>;
type ResultCallback<T> = Rc<dyn Fn(ActionResult<T>)>;

pub struct FormActionController<F: 'static, T: 'static> {
    action: StoredValue<BoxedAction<F, T>>,
    state: RwSignal<ActionSnapshot<T>>,
    on_success: Option<StoredValue<ResultCallback<T>>>,
    on_error: Option<StoredValue<ResultCallback<T>>>,
}

impl<F: 'static, T: 'static> Clone for FormActionController<F, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static, T: 'static> Copy for FormActionController<F, T> {}

impl<F, T> FormActionController<F, T>
where
    F: 'static,
    T: Clone + 'static,
{
    pub fn new<A, Fut>(action: A, default_result: ActionResult<T>) -> Self
    where
        A: Fn(ActionResult<T>, F) -> Fut + 'static,
        Fut: Future<Output = ActionResult<T>> + 'static,
    {
        let action: BoxedAction<F, T> =
            Rc::new(move |previous, fields| Box::pin(action(previous, fields)));
        Self {
            action: store_value(action),
            state: create_rw_signal(ActionSnapshot {
                pending: false,
                result: default_result,
            }),
            on_success: None,
            on_error: None,
        }
    }

    pub fn on_success(mut self, callback: impl Fn(ActionResult<T>) + 'static) -> Self {
        let callback: ResultCallback<T> = Rc::new(callback);
        self.on_success = Some(store_value(callback));
        self
    }

    pub fn on_error(mut self, callback: impl Fn(ActionResult<T>) + 'static) -> Self {
        let callback: ResultCallback<T> = Rc::new(callback);
        self.on_error = Some(store_value(callback));
        self
    }

    pub fn pending(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|snapshot| snapshot.pending))
    }

    pub fn result(&self) -> Signal<ActionResult<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|snapshot| snapshot.result.clone()))
    }

    pub fn snapshot(&self) -> Signal<ActionSnapshot<T>> {
        self.state.into()
    }

    /// Untracked read for event handlers.
    pub fn is_pending(&self) -> bool {
        self.state
            .try_with_untracked(|snapshot| snapshot.pending)
            .unwrap_or(false)
    }

    /// Runs the action once with the current result and `fields`.
    pub async fn submit(&self, fields: F) -> Submission<T> {
        let previous = match self
            .state
            .try_with_untracked(|snapshot| (!snapshot.pending).then(|| snapshot.result.clone()))
        {
            Some(Some(previous)) => previous,
            Some(None) => {
                log::debug!("form action already in flight; submission ignored");
                return Submission::Ignored;
            }
            None => return Submission::Ignored,
        };

        self.state.update(|snapshot| snapshot.pending = true);
        let future = self.action.with_value(|action| action(previous, fields));
        let result = future.await;

        // The owning view may have been disposed while the action was running.
        self.state.try_update(|snapshot| {
            snapshot.pending = false;
            snapshot.result = result.clone();
        });

        let callback = if result.is_failure() {
            self.on_error
        } else {
            self.on_success
        };
        if let Some(callback) = callback {
            let callback = callback.try_with_value(|callback| Rc::clone(callback));
            if let Some(callback) = callback {
                callback(result.clone());
            }
        }

        Submission::Completed(result)
    }

    /// Fire-and-forget variant of [`submit`](Self::submit) for event handlers.
    pub fn dispatch(&self, fields: F) {
        let controller = *self;
        spawn_local(async move {
            controller.submit(fields).await;
        });
    }
}

/// Creates a controller seeded with `default_result`.
pub fn use_form_action<F, T, A, Fut>(
    action: A,
    default_result: ActionResult<T>,
) -> FormActionController<F, T>
where
    F: 'static,
    T: Clone + 'static,
    A: Fn(ActionResult<T>, F) -> Fut + 'static,
    Fut: Future<Output = ActionResult<T>> + 'static,
{
    FormActionController::new(action, default_result)
}
