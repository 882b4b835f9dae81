//! Matching query tokens against the zones of a layout.

use std::time::{Duration, Instant};

use folio_layout::{Layout, Zone};
use folio_query::NormalizedQuery;

use crate::{DimensionTable, MatchResult, PageScale, SearchError, SearchParams, Span};

/// A point in time after which a search gives up.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deadline {
    /// When the search started.
    started: Instant,
    /// How long it may run.
    timeout: Duration,
}

impl Deadline {
    /// Starts the clock now, if the params carry a timeout.
    pub(crate) fn start(params: &SearchParams) -> Option<Self> {
        params.timeout.map(|timeout| Self {
            started: Instant::now(),
            timeout,
        })
    }

    /// Fails once the timeout has elapsed.
    fn check(self) -> Result<(), SearchError> {
        if self.started.elapsed() >= self.timeout {
            return Err(SearchError::DeadlineExceeded {
                timeout: self.timeout,
            });
        }
        Ok(())
    }
}

/// Searches a parsed layout for the query's tokens.
///
/// Every page of the layout must have an entry in `dims`; this is checked
/// before any zone is examined. Pages, zones and tokens are visited in order,
/// and each zone containing a token yields one result for that token.
pub fn search_layout(
    layout: &Layout,
    query: &NormalizedQuery,
    dims: &DimensionTable,
    params: &SearchParams,
) -> Result<Vec<MatchResult>, SearchError> {
    search_layout_until(layout, query, dims, params, Deadline::start(params))
}

/// [`search_layout`] against a deadline that may already be running.
pub(crate) fn search_layout_until(
    layout: &Layout,
    query: &NormalizedQuery,
    dims: &DimensionTable,
    params: &SearchParams,
    deadline: Option<Deadline>,
) -> Result<Vec<MatchResult>, SearchError> {
    let tokens: Vec<Vec<char>> = query
        .searchable_tokens()
        .map(|token| token.chars().collect())
        .collect();
    if tokens.is_empty() {
        return Ok(Vec::new());
    }
    dims.ensure_covers(layout)?;
    if params.is_full(0) {
        return Ok(Vec::new());
    }

    let mut results = Vec::new();
    for page in &layout.pages {
        let mut page_scale = None;
        for (zone_index, zone) in page.zones.iter().enumerate() {
            if let Some(deadline) = deadline {
                deadline.check()?;
            }
            let text: Vec<char> = zone.text.chars().collect();
            for token in &tokens {
                let offsets = find_occurrences(&text, token);
                if offsets.is_empty() {
                    continue;
                }
                let scale = match page_scale {
                    Some(scale) => scale,
                    None => *page_scale.insert(PageScale::new(page, dims.get(page.number)?)?),
                };
                results.push(build_match(
                    zone, zone_index, &text, token, &offsets, &scale, params,
                )?);
                if params.is_full(results.len()) {
                    log::debug!("stopping at {} results", results.len());
                    return Ok(results);
                }
            }
        }
    }
    log::debug!(
        "{} results across {} pages",
        results.len(),
        layout.pages.len()
    );
    Ok(results)
}

/// Builds the result for one token hitting one zone.
fn build_match(
    zone: &Zone,
    zone_index: usize,
    text: &[char],
    token: &[char],
    offsets: &[usize],
    scale: &PageScale,
    params: &SearchParams,
) -> Result<MatchResult, SearchError> {
    let mut paragraph = scale.paragraph(zone, zone_index);
    for &offset in offsets {
        let span = Span {
            offset,
            len: token.len(),
        };
        paragraph.boxes.push(scale.word(
            zone,
            zone_index,
            text.len(),
            span,
            params.word_padding,
        )?);
    }
    Ok(MatchResult {
        token: token.iter().collect(),
        text: highlight(
            text,
            offsets,
            token.len(),
            &params.highlight_open,
            &params.highlight_close,
        ),
        par: vec![paragraph],
    })
}

/// Returns true if two characters are equal ignoring case.
fn chars_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Character offsets of every non-overlapping case-insensitive occurrence of
/// `needle` in `haystack`, left to right.
pub fn find_occurrences(haystack: &[char], needle: &[char]) -> Vec<usize> {
    let mut offsets = Vec::new();
    if needle.is_empty() {
        return offsets;
    }
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        let window = &haystack[start..start + needle.len()];
        if window.iter().zip(needle).all(|(&a, &b)| chars_match(a, b)) {
            offsets.push(start);
            start += needle.len();
        } else {
            start += 1;
        }
    }
    offsets
}

/// Wraps each occurrence in markers, keeping the text's own casing.
pub fn highlight(text: &[char], offsets: &[usize], len: usize, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len() + offsets.len() * (open.len() + close.len()));
    let mut cursor = 0;
    for &offset in offsets {
        out.extend(&text[cursor..offset]);
        out.push_str(open);
        out.extend(&text[offset..offset + len]);
        out.push_str(close);
        cursor = offset + len;
    }
    out.extend(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use folio_layout::Page;
    use folio_leaves::ImageDimensions;
    use folio_query::normalize;

    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn zone(text: &str) -> Zone {
        Zone {
            top: 100.0,
            left: 50.0,
            width: 300.0,
            height: 40.0,
            text: text.into(),
        }
    }

    fn page(number: usize, texts: &[&str]) -> Page {
        Page {
            number,
            width: 1000.0,
            height: 1500.0,
            zones: texts.iter().map(|t| zone(t)).collect(),
        }
    }

    fn dims(pages: usize) -> DimensionTable {
        DimensionTable::from_ordered(vec![ImageDimensions::new(2000, 3000); pages])
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find_occurrences(&chars("The QUICK fox"), &chars("quick")), vec![4]);
        assert_eq!(find_occurrences(&chars("ÉCOLE école"), &chars("école")), vec![0, 6]);
        assert!(find_occurrences(&chars("fox"), &chars("quick")).is_empty());
        assert!(find_occurrences(&chars("fox"), &[]).is_empty());
    }

    #[test]
    fn test_find_is_non_overlapping() {
        assert_eq!(find_occurrences(&chars("aaaaa"), &chars("aa")), vec![0, 2]);
    }

    #[test]
    fn test_highlight_preserves_casing() {
        let text = chars("Quick and QUICK");
        let offsets = find_occurrences(&text, &chars("quick"));
        assert_eq!(
            highlight(&text, &offsets, 5, "{{{", "}}}"),
            "{{{Quick}}} and {{{QUICK}}}"
        );
        assert_eq!(highlight(&text, &[], 5, "<", ">"), "Quick and QUICK");
    }

    #[test]
    fn test_single_occurrence_at_double_scale() {
        let layout = Layout {
            pages: vec![page(1, &["the quick fox"])],
        };
        let results =
            search_layout(&layout, &normalize("quick"), &dims(1), &SearchParams::default()).unwrap();
        assert_eq!(results.len(), 1);
        let result = &results[0];
        assert_eq!(result.text, "the {{{quick}}} fox");
        assert_eq!(result.token, "quick");
        assert_eq!(result.par.len(), 1);
        let par = &result.par[0];
        assert_eq!((par.t, par.r, par.b, par.l, par.page), (200, 1300, 2720, 100, 1));
        assert_eq!(par.boxes.len(), 1);
        let word = par.boxes[0];
        assert_eq!((word.l, word.r, word.t, word.b), (285, 608, 200, 280));
    }

    #[test]
    fn test_one_box_per_occurrence() {
        let layout = Layout {
            pages: vec![page(1, &["fox and fox"])],
        };
        let results =
            search_layout(&layout, &normalize("fox"), &dims(1), &SearchParams::default()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "{{{fox}}} and {{{fox}}}");
        assert_eq!(results[0].boxes().len(), 2);
        assert!(results[0].boxes()[0].l < results[0].boxes()[1].l);
    }

    #[test]
    fn test_one_result_per_token_and_zone() {
        let layout = Layout {
            pages: vec![page(1, &["the quick brown fox", "a brown dog"])],
        };
        let results = search_layout(
            &layout,
            &normalize("quick brown"),
            &dims(1),
            &SearchParams::default(),
        )
        .unwrap();
        let tokens: Vec<_> = results.iter().map(|r| r.token.as_str()).collect();
        assert_eq!(tokens, vec!["quick", "brown", "quick brown", "brown"]);
        assert_eq!(results[2].text, "the {{{quick brown}}} fox");
        assert_eq!(results[3].text, "a {{{brown}}} dog");
    }

    #[test]
    fn test_short_tokens_are_skipped() {
        let layout = Layout {
            pages: vec![page(1, &["an ox in a box"])],
        };
        let results =
            search_layout(&layout, &normalize("an ox box"), &dims(1), &SearchParams::default())
                .unwrap();
        let tokens: Vec<_> = results.iter().map(|r| r.token.as_str()).collect();
        assert_eq!(tokens, vec!["box"]);
    }

    #[test]
    fn test_short_query_is_empty_without_dimension_check() {
        let layout = Layout {
            pages: vec![page(1, &["ox"])],
        };
        let results = search_layout(
            &layout,
            &normalize("ox"),
            &DimensionTable::new(),
            &SearchParams::default(),
        )
        .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_missing_dimensions_fail_before_matching() {
        let layout = Layout {
            pages: (1..=5).map(|n| page(n, &["quick"])).collect(),
        };
        let err = search_layout(&layout, &normalize("quick"), &dims(4), &SearchParams::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SearchError::PageOutOfRange {
                page: 5,
                available: 4
            }
        ));
    }

    #[test]
    fn test_pages_scale_independently() {
        let layout = Layout {
            pages: vec![page(1, &["quick"]), page(2, &["quick"])],
        };
        let mut table = DimensionTable::new();
        table.insert(1, ImageDimensions::new(1000, 1500));
        table.insert(2, ImageDimensions::new(3000, 4500));
        let results =
            search_layout(&layout, &normalize("quick"), &table, &SearchParams::default()).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].par[0].l, 50);
        assert_eq!(results[1].par[0].l, 150);
        assert_eq!(results[1].page(), 2);
    }

    #[test]
    fn test_max_results_stops_early() {
        let layout = Layout {
            pages: vec![page(1, &["quick", "quick", "quick"])],
        };
        let params = SearchParams::default().with_max_results(2);
        let results = search_layout(&layout, &normalize("quick"), &dims(1), &params).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_zero_max_results_returns_nothing() {
        let layout = Layout {
            pages: vec![page(1, &["quick"])],
        };
        let params = SearchParams::default().with_max_results(0);
        let results = search_layout(&layout, &normalize("quick"), &dims(1), &params).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_custom_markers_and_padding() {
        let layout = Layout {
            pages: vec![page(1, &["the quick fox"])],
        };
        let params = SearchParams::default()
            .with_markers("<b>", "</b>")
            .with_word_padding(0);
        let results = search_layout(&layout, &normalize("quick"), &dims(1), &params).unwrap();
        assert_eq!(results[0].text, "the <b>quick</b> fox");
        // right = left + 5 * 300 / 13, scaled by 2
        assert_eq!(results[0].boxes()[0].r, 515);
    }

    #[test]
    fn test_zero_timeout_exceeds_deadline() {
        let layout = Layout {
            pages: vec![page(1, &["quick"])],
        };
        let params = SearchParams::default().with_timeout(Duration::ZERO);
        let err = search_layout(&layout, &normalize("quick"), &dims(1), &params).unwrap_err();
        assert!(matches!(err, SearchError::DeadlineExceeded { .. }));
    }

    #[test]
    fn test_degenerate_page_fails_only_when_hit() {
        let mut empty_page = page(2, &["nothing here"]);
        empty_page.width = 0.0;
        let layout = Layout {
            pages: vec![page(1, &["quick"]), empty_page],
        };
        let results =
            search_layout(&layout, &normalize("quick"), &dims(2), &SearchParams::default()).unwrap();
        assert_eq!(results.len(), 1);

        let err = search_layout(&layout, &normalize("here"), &dims(2), &SearchParams::default())
            .unwrap_err();
        assert!(matches!(err, SearchError::Geometry { page: 2, .. }));
    }
}
