/*!
Macros for sending dispatches from a procedure.
*/

/// Sends a dispatch through the dispatcher of a procedure, if a dispatcher is set.
///
/// The dispatch is only built if a dispatcher is set.
macro_rules! send {
    ($self:ident, $dispatch:expr) => {
        if let Some(dispatcher) = &mut $self.dispatcher {
            dispatcher(&$dispatch);
        }
    };
}
pub(crate) use send;
