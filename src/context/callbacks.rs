/*!
Callbacks consulted by a context during a solve.

At present the only callback is a request to stop, checked together with the [budget](crate::config::Budget) before each decision.
So, a solve which values every atom through propagation alone never consults the callback.
A stop is reported as [Terminated](crate::types::err::ResourceError::Terminated), and the context may be solved again later.

```rust
# use websat::context::Context;
# use websat::types::err::{ErrorKind, ResourceError};
let mut the_context = Context::default();
let p = the_context.fresh_or_max_literal();
assert!(the_context.add_clause(vec![p]).is_ok());
let _ = the_context.fresh_or_max_literal();

the_context.set_callback_terminate(Box::new(|| true));
assert_eq!(
    the_context.solve(),
    Err(ErrorKind::ResourceExhausted(ResourceError::Terminated))
);
```
*/

use super::GenericContext;

/// Returns true to stop the solve in progress.
pub type CallbackTerminate = dyn FnMut() -> bool;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Replaces any termination callback with `callback`.
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    /// Whether the termination callback, if any, requests a stop.
    pub fn check_callback_terminate(&mut self) -> bool {
        match &mut self.callback_terminate {
            Some(callback) => callback(),
            None => false,
        }
    }
}
