/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

use crate::describer::RemoteError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const EMPTY_RESULT_MESSAGE: &str =
    "Your query returned no results. Please change your search criteria and try again.";

/// Failures of a route table lookup. Neither is recovered locally.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LookupError {
    /// The remote describe call failed; carries the describer's error unchanged.
    Remote(RemoteError),
    /// The remote call succeeded but no route table matched.
    EmptyResult,
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Remote(err) => write!(f, "{err}"),
            LookupError::EmptyResult => write!(f, "{EMPTY_RESULT_MESSAGE}"),
        }
    }
}

impl Error for LookupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LookupError::Remote(err) => Some(err),
            LookupError::EmptyResult => None,
        }
    }
}

impl From<RemoteError> for LookupError {
    fn from(err: RemoteError) -> Self {
        LookupError::Remote(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{LookupError, EMPTY_RESULT_MESSAGE};
    use crate::describer::{RemoteError, RemoteErrorCode};
    use std::error::Error;

    #[test]
    fn remote_error_is_reported_verbatim_with_source() {
        let remote = RemoteError::fail_with_code(RemoteErrorCode::Unauthorized, "AuthFailure");
        let error = LookupError::from(remote.clone());

        assert_eq!(error.to_string(), remote.to_string());
        assert!(error.source().is_some());
    }

    #[test]
    fn empty_result_message_is_stable() {
        let error = LookupError::EmptyResult;

        assert_eq!(
            error.to_string(),
            "Your query returned no results. Please change your search criteria and try again."
        );
        assert_eq!(error.to_string(), EMPTY_RESULT_MESSAGE);
        assert!(error.source().is_none());
    }
}
