//! Continuation cursors for paginated operations.
//!
//! Paginated outputs carry a "last evaluated" marker that the next request
//! echoes back in its "exclusive start" field. [`Paginate::next_page`] does
//! that copy; driving the loop is left to the caller.

use crate::input::{
    ListBackupsInput, ListGlobalTablesInput, ListTablesInput, ListTagsOfResourceInput, QueryInput,
    ScanInput,
};
use crate::output::{
    ListBackupsOutput, ListGlobalTablesOutput, ListTablesOutput, ListTagsOfResourceOutput,
    QueryOutput, ScanOutput,
};

/// An input whose operation returns results a page at a time.
pub trait Paginate: Sized {
    /// The output carrying the continuation marker.
    type Output;

    /// Returns the input for the page after `output`, or `None` if `output`
    /// was the last page.
    fn next_page(&self, output: &Self::Output) -> Option<Self>;
}

macro_rules! impl_paginate {
    ($($input:ident => $output:ident { $marker:ident => $start:ident }),+ $(,)?) => {
        $(
            impl Paginate for $input {
                type Output = $output;

                fn next_page(&self, output: &Self::Output) -> Option<Self> {
                    let marker = output.$marker.clone()?;
                    let mut next = self.clone();
                    next.$start = Some(marker);
                    Some(next)
                }
            }
        )+
    };
}

impl_paginate! {
    ListTablesInput => ListTablesOutput { last_evaluated_table_name => exclusive_start_table_name },
    ListBackupsInput => ListBackupsOutput { last_evaluated_backup_arn => exclusive_start_backup_arn },
    ListGlobalTablesInput => ListGlobalTablesOutput {
        last_evaluated_global_table_name => exclusive_start_global_table_name
    },
    ListTagsOfResourceInput => ListTagsOfResourceOutput { next_token => next_token },
    QueryInput => QueryOutput { last_evaluated_key => exclusive_start_key },
    ScanInput => ScanOutput { last_evaluated_key => exclusive_start_key },
}
