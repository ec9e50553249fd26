//! Scripted gateway for tests
//!
//! Replies are registered per method, optionally narrowed to exact
//! arguments. Every call is recorded so tests can assert on ordering.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use super::methods::short_name;
use super::Gateway;
use crate::error::GatewayError;

/// One call seen by the [`ScriptedGateway`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub path: String,
    /// Short method name, e.g. `removeTerminal`
    pub method: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Fail(String),
}

/// Gateway double answering from a script instead of a live service
///
/// Unscripted calls succeed with an empty reply. When several replies are
/// queued for the same key they are handed out in order and the last one
/// repeats.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    replies: RefCell<HashMap<String, VecDeque<Reply>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

fn key(method: &str, args: &[&str]) -> String {
    let method = short_name(method);
    if args.is_empty() {
        method.to_string()
    } else {
        format!("{} {}", method, args.join(" "))
    }
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `method`; empty `args` matches any arguments
    pub fn reply(&self, method: &str, args: &[&str], text: &str) -> &Self {
        self.push(key(method, args), Reply::Text(text.to_string()))
    }

    /// Queue a failure for `method`; empty `args` matches any arguments
    pub fn fail(&self, method: &str, args: &[&str], message: &str) -> &Self {
        self.push(key(method, args), Reply::Fail(message.to_string()))
    }

    fn push(&self, key: String, reply: Reply) -> &Self {
        self.replies.borrow_mut().entry(key).or_default().push_back(reply);
        self
    }

    /// All calls in the order they were made
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Argument lists of every call to `method`
    pub fn calls_to(&self, method: &str) -> Vec<Vec<String>> {
        let method = short_name(method);
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.method == method)
            .map(|c| c.args.clone())
            .collect()
    }

    /// Index of the first call to `method` with exactly `args`
    pub fn position(&self, method: &str, args: &[&str]) -> Option<usize> {
        let method = short_name(method);
        self.calls
            .borrow()
            .iter()
            .position(|c| c.method == method && c.args == args)
    }

    fn next_reply(&self, key: &str) -> Option<Reply> {
        let mut replies = self.replies.borrow_mut();
        let queue = replies.get_mut(key)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

impl Gateway for ScriptedGateway {
    fn call(&self, path: &str, method: &str, args: &[&str]) -> Result<String, GatewayError> {
        self.calls.borrow_mut().push(RecordedCall {
            path: path.to_string(),
            method: short_name(method).to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });

        let reply = self
            .next_reply(&key(method, args))
            .or_else(|| self.next_reply(short_name(method)));

        match reply {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail(stderr)) => Err(GatewayError::Failed {
                method: short_name(method).to_string(),
                status: "1".to_string(),
                stderr,
            }),
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::methods::*;
    use super::*;

    #[test]
    fn test_exact_args_take_precedence() {
        let gateway = ScriptedGateway::new();
        gateway
            .reply(TAB_TITLE, &[], "fallback")
            .reply(TAB_TITLE, &["3"], "three");

        assert_eq!(gateway.call(PATH_TABS, TAB_TITLE, &["3"]).unwrap(), "three");
        assert_eq!(gateway.call(PATH_TABS, TAB_TITLE, &["4"]).unwrap(), "fallback");
        assert_eq!(gateway.call(PATH_TABS, SET_TAB_TITLE, &[]).unwrap(), "");
    }

    #[test]
    fn test_queued_replies_then_last_repeats() {
        let gateway = ScriptedGateway::new();
        gateway.reply(ADD_SESSION, &[], "1").reply(ADD_SESSION, &[], "2");

        assert_eq!(gateway.call(PATH_SESSIONS, ADD_SESSION, &[]).unwrap(), "1");
        assert_eq!(gateway.call(PATH_SESSIONS, ADD_SESSION, &[]).unwrap(), "2");
        assert_eq!(gateway.call(PATH_SESSIONS, ADD_SESSION, &[]).unwrap(), "2");
        assert_eq!(gateway.calls().len(), 3);
    }
}
