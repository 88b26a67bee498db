pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Markup error: {message}")]
    Markup { message: String },

    #[error("Decision node without an id")]
    MissingNodeId,

    #[error("Duplicate decision node id: {id}")]
    DuplicateNode { id: String },

    #[error("Option {index} of {owner} declares both data-next and data-result")]
    AmbiguousOption { owner: String, index: usize },

    #[error("Option {index} of {owner} declares neither data-next nor data-result")]
    EmptyOption { owner: String, index: usize },

    #[error("Back control in {owner} has no data-back target")]
    EmptyBackTarget { owner: String },

    #[error("Start node `{id}` is not declared in the page")]
    MissingStartNode { id: String },
}
