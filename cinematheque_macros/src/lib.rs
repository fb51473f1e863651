mod document;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Document)]
// ============================================================================

/// Derive macro binding a serde type to a document collection.
///
/// # Usage
///
/// ```ignore
/// #[derive(Serialize, Deserialize, Clone, Document)]
/// #[document(collection = "Cinema")]
/// struct Film {
///     nom: String,
/// }
/// ```
///
/// Without a `collection` attribute the collection name is the struct name
/// in snake_case followed by `s` (`Film` -> `films`).
#[proc_macro_derive(Document, attributes(document))]
pub fn derive_document(input: TokenStream) -> TokenStream {
    document::derive_document(input)
}
