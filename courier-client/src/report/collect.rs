//! Paginated order collector
//!
//! Requests pages strictly sequentially (page N+1 only after page N
//! resolves) so the accumulated sequence preserves server order, which is
//! the row order of the final export.

use shared::client::OrderListRequest;
use shared::models::{OrderRecord, RawOrder};

use crate::api::OrdersApi;
use crate::report::range::ReportRange;
use crate::{ClientError, ClientResult};

/// Collect every order in `range`, normalized, in server order
///
/// Termination: the server-reported `total` is authoritative once seen;
/// without one, a page shorter than `page_size` ends the collection. If
/// neither signal arrives within `max_pages` pages the collection fails
/// closed with [`ClientError::PageLimitExceeded`]. Any request failure
/// aborts the whole collection and discards partial rows; a retry reissues
/// page 1.
pub async fn collect_orders(
    api: &dyn OrdersApi,
    range: &ReportRange,
    page_size: u32,
    max_pages: u32,
) -> ClientResult<Vec<OrderRecord>> {
    let mut raw: Vec<RawOrder> = Vec::new();
    let mut total: Option<u64> = None;
    let mut page: u32 = 1;

    loop {
        if page > max_pages {
            return Err(ClientError::PageLimitExceeded { pages: max_pages });
        }

        let request = OrderListRequest {
            date_from: range.from_iso(),
            date_to: range.to_iso(),
            limit: page_size,
            page,
            search: None,
            include_pickups: Some(true),
        };
        let data = api.list_orders(&request).await?;

        let page_len = data.orders.len();
        raw.extend(data.orders);
        if data.total.is_some() {
            total = data.total;
        }

        tracing::debug!(page, page_len, total = ?total, "collected report page");

        match total {
            // Total count wins over the short-page signal when both exist
            Some(t) => {
                if raw.len() as u64 >= t {
                    break;
                }
            }
            None => {
                if page_len < page_size as usize {
                    break;
                }
            }
        }

        page += 1;
    }

    Ok(raw.into_iter().map(RawOrder::normalize).collect())
}
