use super::constants::FILTER_ALL;

/// Whether a product card with `category` stays visible under `filter`.
///
/// `all` shows every card. Otherwise the attribute values are compared as-is,
/// so a button without `data-filter` shows only cards without `data-category`.
pub fn card_matches(filter: Option<&str>, category: Option<&str>) -> bool {
    filter == Some(FILTER_ALL) || filter == category
}

/// Visible/hidden split for a list of card categories, preserving order.
pub fn partition_cards<'a, I>(filter: Option<&str>, categories: I) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    categories
        .into_iter()
        .map(|c| card_matches(filter, c))
        .collect()
}
