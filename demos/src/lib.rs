// Copyright 2026 the Tripline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Tripline demo binaries.
//!
//! The only piece here is [`SampleSource`], a deterministic stand-in for
//! the real itinerary-generation service: any valid request yields the same
//! small city trip, with the destination echoed into the event text.

use tripline_model::{
    EventCategory, GenerateError, GeoPoint, Itinerary, ItineraryEvent, ItinerarySource,
    TripRequest,
};

/// A deterministic itinerary source for demos and manual testing.
///
/// Produces a six-stop day built around a fixed base coordinate (central
/// Paris), covering every event category so each hover path through the
/// engine can be exercised. Requests are validated the same way a real
/// source would: empty destinations and reversed date ranges are refused.
#[derive(Copy, Clone, Debug, Default)]
pub struct SampleSource;

/// Base coordinate the sample stops are scattered around.
const BASE: GeoPoint = GeoPoint::new(48.8566, 2.3522);

fn stop(
    index: usize,
    title: &str,
    category: EventCategory,
    time: &str,
    location: &str,
    description: &str,
    duration: &str,
    dlat: f64,
    dlng: f64,
) -> ItineraryEvent {
    ItineraryEvent {
        id: format!("evt-{index}"),
        title: title.into(),
        category,
        time: time.into(),
        location: location.into(),
        description: description.into(),
        duration: duration.into(),
        coordinate: BASE.offset_by(dlat, dlng),
    }
}

impl ItinerarySource for SampleSource {
    fn generate(&self, request: &TripRequest) -> Result<Itinerary, GenerateError> {
        request.validate()?;
        let city = request.destination.clone();
        Ok(Itinerary {
            destination: city.clone(),
            start_date: request.start_date.clone(),
            end_date: request.end_date.clone(),
            events: vec![
                stop(
                    1,
                    &format!("Arrival in {city}"),
                    EventCategory::Flight,
                    "09:15",
                    "International Airport",
                    "Touch down and pick up luggage",
                    "1 h",
                    0.08,
                    0.12,
                ),
                stop(
                    2,
                    "Check in at the hotel",
                    EventCategory::Accommodation,
                    "11:00",
                    "Old Town",
                    "Drop bags and freshen up",
                    "45 min",
                    0.004,
                    -0.006,
                ),
                stop(
                    3,
                    "Lunch at a corner bistro",
                    EventCategory::Food,
                    "12:30",
                    "Market Square",
                    "Local specialities, outdoor seating",
                    "1.5 h",
                    -0.003,
                    0.005,
                ),
                stop(
                    4,
                    "Afternoon at the museum",
                    EventCategory::Activity,
                    "14:30",
                    "Museum District",
                    "Permanent collection plus the rooftop view",
                    "3 h",
                    0.006,
                    0.010,
                ),
                stop(
                    5,
                    "Metro to the theatre",
                    EventCategory::Transit,
                    "18:45",
                    "Line 4",
                    "Two stops north",
                    "15 min",
                    0.010,
                    0.002,
                ),
                stop(
                    6,
                    "Evening show",
                    EventCategory::Entertainment,
                    "20:00",
                    "Grand Theatre",
                    "Front balcony seats",
                    "2.5 h",
                    0.012,
                    0.001,
                ),
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest {
            destination: "Paris".into(),
            start_date: "2026-11-01".into(),
            end_date: "2026-11-02".into(),
        }
    }

    #[test]
    fn generates_a_six_stop_trip() {
        let itinerary = SampleSource.generate(&request()).unwrap();
        assert_eq!(itinerary.len(), 6);
        assert_eq!(itinerary.events[0].id, "evt-1");
        assert!(itinerary.events[0].title.contains("Paris"));
    }

    #[test]
    fn generation_is_deterministic() {
        let first = SampleSource.generate(&request()).unwrap();
        let second = SampleSource.generate(&request()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn refuses_invalid_requests() {
        let mut bad = request();
        bad.destination = String::new();
        assert_eq!(
            SampleSource.generate(&bad),
            Err(GenerateError::EmptyDestination)
        );
    }
}
