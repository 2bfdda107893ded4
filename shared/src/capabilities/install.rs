use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::overlay::InstallHandle;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "op", content = "data")]
pub enum InstallOperation {
    /// Replay the stored platform event. The shell owns what the handle means.
    Prompt { handle: InstallHandle },
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InstallOutcome {
    Accepted,
    Dismissed,
}

impl Operation for InstallOperation {
    type Output = InstallOutcome;
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum InstallError {
    #[error("no install prompt is available")]
    NoHandle,
}

pub struct InstallPrompt<Ev> {
    context: CapabilityContext<InstallOperation, Ev>,
}

impl<Ev> Capability<Ev> for InstallPrompt<Ev> {
    type Operation = InstallOperation;
    type MappedSelf<MappedEv> = InstallPrompt<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        InstallPrompt::new(self.context.map_event(f))
    }
}

impl<Ev> InstallPrompt<Ev>
where
    Ev: Send + 'static,
{
    pub fn new(context: CapabilityContext<InstallOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn prompt<F>(&self, handle: InstallHandle, make_event: F)
    where
        F: FnOnce(InstallOutcome) -> Ev + Send + 'static,
    {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            let outcome = ctx
                .request_from_shell(InstallOperation::Prompt { handle })
                .await;
            ctx.update_app(make_event(outcome));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&InstallOutcome::Dismissed).unwrap(),
            "\"dismissed\""
        );
    }

    #[test]
    fn prompt_carries_the_handle_verbatim() {
        let op = InstallOperation::Prompt {
            handle: InstallHandle("beforeinstallprompt#1".into()),
        };
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["data"]["handle"], "beforeinstallprompt#1");
    }
}
