use tokio::task::JoinSet;

use crate::lookup::DictionaryLookupController;

pub fn handle_lookup(
    lookup: &DictionaryLookupController,
    word: Option<&str>,
    tasks: &mut JoinSet<()>,
) {
    // Sequence is claimed here, in event order, not when the task gets scheduled
    let Some(pending) = lookup.start(word) else {
        return;
    };

    let lookup = lookup.clone();
    tasks.spawn(async move {
        lookup.resolve(pending).await;
    });
}
