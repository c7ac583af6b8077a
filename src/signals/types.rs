/*!
 * Signal Types
 * Platform-independent signal identifiers and result types
 */

use crate::core::types::ContextId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Signal operation result
pub type SignalResult<T> = Result<T, SignalError>;

/// Signal errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SignalError {
    /// Internal signal number outside the recognized range
    #[error("Unknown signal number: {0}")]
    UnknownSignal(u32),

    /// Signal whose disposition cannot be changed
    #[error("Signal cannot be caught or ignored: {0}")]
    UncatchableSignal(Signal),

    /// Handler table is at capacity for this context
    #[error("Too many handlers registered on context {0}")]
    TooManyHandlers(ContextId),

    /// Blocking-section bracket called out of order; a bug in the caller
    #[error("Blocking-section misuse on context {context}: {reason}")]
    BracketMisuse { context: ContextId, reason: String },

    /// Exception raised by an interpreted-level handler; propagated unmodified
    #[error("Handler raised: {0}")]
    Handler(String),
}

/// Internal signal identifiers
///
/// Numbering is the runtime's own and is stable across host operating
/// systems; the translator maps these to and from host signal numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Signal {
    /// Hangup detected on controlling terminal
    SIGHUP = 1,
    /// Interrupt from keyboard (Ctrl+C)
    SIGINT = 2,
    /// Quit from keyboard
    SIGQUIT = 3,
    /// Illegal instruction
    SIGILL = 4,
    /// Trace/breakpoint trap
    SIGTRAP = 5,
    /// Abort signal
    SIGABRT = 6,
    /// Bus error (bad memory access)
    SIGBUS = 7,
    /// Floating-point exception
    SIGFPE = 8,
    /// Kill signal (cannot be caught or ignored)
    SIGKILL = 9,
    /// User-defined signal 1
    SIGUSR1 = 10,
    /// Invalid memory reference
    SIGSEGV = 11,
    /// User-defined signal 2
    SIGUSR2 = 12,
    /// Broken pipe
    SIGPIPE = 13,
    /// Timer signal
    SIGALRM = 14,
    /// Termination signal
    SIGTERM = 15,
    /// Child process stopped or terminated
    SIGCHLD = 16,
    /// Continue if stopped
    SIGCONT = 17,
    /// Stop process (cannot be caught or ignored)
    SIGSTOP = 18,
    /// Stop typed at terminal (Ctrl+Z)
    SIGTSTP = 19,
    /// Terminal input for background process
    SIGTTIN = 20,
    /// Terminal output for background process
    SIGTTOU = 21,
    /// Urgent condition on socket
    SIGURG = 22,
    /// CPU time limit exceeded
    SIGXCPU = 23,
    /// File size limit exceeded
    SIGXFSZ = 24,
    /// Virtual alarm clock
    SIGVTALRM = 25,
    /// Profiling timer expired
    SIGPROF = 26,
    /// Window resize signal
    SIGWINCH = 27,
    /// I/O now possible
    SIGIO = 28,
    /// Bad system call
    SIGSYS = 29,
}

/// Number of internal signal slots (identifier 0 is unused)
pub const SIGNAL_SLOTS: usize = 30;

impl Signal {
    /// All recognized signals in ascending identifier order
    pub const ALL: [Signal; 29] = [
        Signal::SIGHUP,
        Signal::SIGINT,
        Signal::SIGQUIT,
        Signal::SIGILL,
        Signal::SIGTRAP,
        Signal::SIGABRT,
        Signal::SIGBUS,
        Signal::SIGFPE,
        Signal::SIGKILL,
        Signal::SIGUSR1,
        Signal::SIGSEGV,
        Signal::SIGUSR2,
        Signal::SIGPIPE,
        Signal::SIGALRM,
        Signal::SIGTERM,
        Signal::SIGCHLD,
        Signal::SIGCONT,
        Signal::SIGSTOP,
        Signal::SIGTSTP,
        Signal::SIGTTIN,
        Signal::SIGTTOU,
        Signal::SIGURG,
        Signal::SIGXCPU,
        Signal::SIGXFSZ,
        Signal::SIGVTALRM,
        Signal::SIGPROF,
        Signal::SIGWINCH,
        Signal::SIGIO,
        Signal::SIGSYS,
    ];

    /// Convert from internal signal number
    pub fn from_number(n: u32) -> SignalResult<Self> {
        match n {
            1 => Ok(Signal::SIGHUP),
            2 => Ok(Signal::SIGINT),
            3 => Ok(Signal::SIGQUIT),
            4 => Ok(Signal::SIGILL),
            5 => Ok(Signal::SIGTRAP),
            6 => Ok(Signal::SIGABRT),
            7 => Ok(Signal::SIGBUS),
            8 => Ok(Signal::SIGFPE),
            9 => Ok(Signal::SIGKILL),
            10 => Ok(Signal::SIGUSR1),
            11 => Ok(Signal::SIGSEGV),
            12 => Ok(Signal::SIGUSR2),
            13 => Ok(Signal::SIGPIPE),
            14 => Ok(Signal::SIGALRM),
            15 => Ok(Signal::SIGTERM),
            16 => Ok(Signal::SIGCHLD),
            17 => Ok(Signal::SIGCONT),
            18 => Ok(Signal::SIGSTOP),
            19 => Ok(Signal::SIGTSTP),
            20 => Ok(Signal::SIGTTIN),
            21 => Ok(Signal::SIGTTOU),
            22 => Ok(Signal::SIGURG),
            23 => Ok(Signal::SIGXCPU),
            24 => Ok(Signal::SIGXFSZ),
            25 => Ok(Signal::SIGVTALRM),
            26 => Ok(Signal::SIGPROF),
            27 => Ok(Signal::SIGWINCH),
            28 => Ok(Signal::SIGIO),
            29 => Ok(Signal::SIGSYS),
            _ => Err(SignalError::UnknownSignal(n)),
        }
    }

    /// Get internal signal number
    pub fn number(&self) -> u32 {
        *self as u32
    }

    /// Check if signal can be caught/ignored
    pub fn can_catch(&self) -> bool {
        !matches!(self, Signal::SIGKILL | Signal::SIGSTOP)
    }

    /// Default disposition applied when no handler is registered
    pub fn default_disposition(&self) -> SignalDisposition {
        match self {
            Signal::SIGCHLD | Signal::SIGURG | Signal::SIGWINCH | Signal::SIGIO => {
                SignalDisposition::Ignore
            }
            Signal::SIGSTOP | Signal::SIGTSTP | Signal::SIGTTIN | Signal::SIGTTOU => {
                SignalDisposition::Stop
            }
            Signal::SIGCONT => SignalDisposition::Continue,
            _ => SignalDisposition::Terminate,
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Signal::SIGHUP => "Hangup",
            Signal::SIGINT => "Interrupt",
            Signal::SIGQUIT => "Quit",
            Signal::SIGILL => "Illegal instruction",
            Signal::SIGTRAP => "Trace/breakpoint trap",
            Signal::SIGABRT => "Aborted",
            Signal::SIGBUS => "Bus error",
            Signal::SIGFPE => "Floating point exception",
            Signal::SIGKILL => "Killed",
            Signal::SIGUSR1 => "User defined signal 1",
            Signal::SIGSEGV => "Segmentation fault",
            Signal::SIGUSR2 => "User defined signal 2",
            Signal::SIGPIPE => "Broken pipe",
            Signal::SIGALRM => "Alarm clock",
            Signal::SIGTERM => "Terminated",
            Signal::SIGCHLD => "Child status changed",
            Signal::SIGCONT => "Continued",
            Signal::SIGSTOP => "Stopped (signal)",
            Signal::SIGTSTP => "Stopped",
            Signal::SIGTTIN => "Stopped (tty input)",
            Signal::SIGTTOU => "Stopped (tty output)",
            Signal::SIGURG => "Urgent I/O condition",
            Signal::SIGXCPU => "CPU time limit exceeded",
            Signal::SIGXFSZ => "File size limit exceeded",
            Signal::SIGVTALRM => "Virtual timer expired",
            Signal::SIGPROF => "Profiling timer expired",
            Signal::SIGWINCH => "Window size changed",
            Signal::SIGIO => "I/O possible",
            Signal::SIGSYS => "Bad system call",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.number())
    }
}

/// Default action applied when a signal has no registered handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalDisposition {
    /// Terminate the context
    Terminate,
    /// Ignore the signal
    Ignore,
    /// Stop the context
    Stop,
    /// Continue the context if stopped
    Continue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_signals_round_trip_through_numbers() {
        for sig in Signal::ALL {
            assert_eq!(Signal::from_number(sig.number()).unwrap(), sig);
        }
        assert!(Signal::from_number(0).is_err());
        assert!(Signal::from_number(30).is_err());
    }

    #[test]
    fn all_list_is_ascending_and_dense() {
        for (i, sig) in Signal::ALL.iter().enumerate() {
            assert_eq!(sig.number() as usize, i + 1);
        }
        assert!(Signal::ALL.len() < SIGNAL_SLOTS);
    }

    #[test]
    fn errors_serialize_for_the_embedder() {
        let err = SignalError::BracketMisuse {
            context: 7,
            reason: "leave_blocking while not blocked".into(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: SignalError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn uncatchable_signals() {
        assert!(!Signal::SIGKILL.can_catch());
        assert!(!Signal::SIGSTOP.can_catch());
        assert!(Signal::SIGINT.can_catch());
        assert!(Signal::SIGTERM.can_catch());
    }

    #[test]
    fn default_dispositions_match_host_semantics() {
        assert_eq!(Signal::SIGCHLD.default_disposition(), SignalDisposition::Ignore);
        assert_eq!(Signal::SIGTSTP.default_disposition(), SignalDisposition::Stop);
        assert_eq!(Signal::SIGCONT.default_disposition(), SignalDisposition::Continue);
        assert_eq!(Signal::SIGTERM.default_disposition(), SignalDisposition::Terminate);
        assert_eq!(Signal::SIGINT.default_disposition(), SignalDisposition::Terminate);
    }
}
