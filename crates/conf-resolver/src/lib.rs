//! Executable path resolution for confload
//!
//! Turns a logical command name (`qpdf`, `git`, `C:\Tools\foo.exe`) into an
//! absolute, verified path. Strategies run in a fixed order and the first hit
//! wins:
//!
//! 1. literal absolute path
//! 2. manual `PATH` walk (no subprocess)
//! 3. `which` / `where` lookup, only when subprocesses are allowed
//! 4. conventional install directories for the platform
//!
//! A discovered candidate is never executed. Resolution never fails loudly:
//! every strategy failure degrades to "try the next one" and finally `None`.

mod conventions;
pub mod env;
mod path_walk;
pub mod platform;
pub mod probe;
mod resolver;
mod shell;

pub use conventions::ConventionRoots;
pub use env::{DEFAULT_PATHEXT, DISABLE_SUBPROCESS_VAR, ResolverEnv, ResolverOptions};
pub use platform::Platform;
pub use resolver::{ExecutableResolver, Strategy};
