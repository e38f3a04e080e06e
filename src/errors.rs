// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get access to everything `error_chain!` creates.
use error_chain::*;

use crate::grid::GenerationPhase;

error_chain! {

    errors {
        InvalidConfig(field: &'static str, reason: String) {
            description("invalid maze configuration")
            display("invalid maze configuration: `{}` {}", field, reason)
        }
        GridNotReady(phase: GenerationPhase) {
            description("grid is still being generated")
            display("grid cannot be edited before generation finishes (phase: {:?})", phase)
        }
    }
}
