use yew::{BaseComponent, LocalServerRenderer};

/// Server-renders `C` to a plain markup string (no hydration markers).
pub fn render<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("test runtime");
    let local = tokio::task::LocalSet::new();
    local.block_on(
        &runtime,
        LocalServerRenderer::<C>::with_props(props)
            .hydratable(false)
            .render(),
    )
}

/// Byte offset of `needle` in `markup`, failing the test when it is absent.
pub fn position(markup: &str, needle: &str) -> usize {
    markup
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in rendered page"))
}
