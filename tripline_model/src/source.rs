// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interface to the external itinerary-generation collaborator.

use alloc::string::String;
use core::fmt;

use crate::event::Itinerary;

/// A request to generate an itinerary.
///
/// Dates are ISO-8601 (`YYYY-MM-DD`) display strings, the shape the trip
/// form submits. The engine never does calendar arithmetic on them; the one
/// ordering check it needs holds lexicographically for this format.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripRequest {
    /// Free-form destination, e.g. "Paris, France".
    pub destination: String,
    /// First day of the trip.
    pub start_date: String,
    /// Last day of the trip.
    pub end_date: String,
}

impl TripRequest {
    /// Checks the request against the conditions a source is allowed to
    /// refuse: an empty destination, or an end date before the start date.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.destination.trim().is_empty() {
            return Err(GenerateError::EmptyDestination);
        }
        if self.end_date < self.start_date {
            return Err(GenerateError::ReversedDates);
        }
        Ok(())
    }
}

/// Why itinerary generation was refused.
///
/// The engine treats any of these as "no new itinerary": the prior display
/// state is left untouched, or the idle state is kept if none existed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// The destination was empty or whitespace.
    EmptyDestination,
    /// The end date precedes the start date.
    ReversedDates,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDestination => write!(f, "destination must not be empty"),
            Self::ReversedDates => write!(f, "end date precedes start date"),
        }
    }
}

impl core::error::Error for GenerateError {}

/// The itinerary-generation collaborator.
///
/// Tripline consumes this as a single call: destination plus date range in,
/// a complete [`Itinerary`] out, or a [`GenerateError`] if the request is
/// unusable. Implementations are expected to validate via
/// [`TripRequest::validate`] before producing events.
pub trait ItinerarySource {
    /// Generates an itinerary for the request.
    fn generate(&self, request: &TripRequest) -> Result<Itinerary, GenerateError>;
}
