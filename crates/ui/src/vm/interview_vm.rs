/// User intents the root view dispatches to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InterviewAction {
    Start,
    EditAnswer(String),
    Submit,
    Advance,
    End,
    Restart,
    DismissNotice,
}
