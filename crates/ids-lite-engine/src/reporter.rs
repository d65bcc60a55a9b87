// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Report sinks for per-facet verdict records

use ids_lite_model::EntityId;
use serde::{Deserialize, Serialize};

/// One verdict: a requirement facet evaluated against an applicable entity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Name of the specification being validated
    pub specification: String,
    /// The entity the requirement was tested on
    pub entity: EntityId,
    /// Human-readable description of the requirement facet
    pub facet: String,
    /// Whether the entity satisfied the requirement
    pub passed: bool,
}

/// Consumer of verdict records emitted during validation
///
/// The engine produces one record per (specification, entity, requirement
/// facet); what happens to them (collection, logging, issue export) is the
/// sink's business.
pub trait ReportSink {
    /// Consume one verdict record
    fn record(&mut self, record: Record);
}

/// In-memory sink collecting records as they are emitted
///
/// By default only failing records are kept; enable `report_valid` to keep
/// passing ones too.
#[derive(Debug, Default)]
pub struct SimpleReporter {
    /// Keep passing records as well as failing ones
    pub report_valid: bool,
    /// Collected records, in emission order
    pub records: Vec<Record>,
}

impl SimpleReporter {
    /// Create a reporter that keeps failures only
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reporter that keeps passing records too
    pub fn with_valid() -> Self {
        Self {
            report_valid: true,
            records: Vec::new(),
        }
    }

    /// The failing records collected so far
    pub fn failures(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| !r.passed)
    }
}

impl ReportSink for SimpleReporter {
    fn record(&mut self, record: Record) {
        if record.passed && !self.report_valid {
            return;
        }
        self.records.push(record);
    }
}

/// Sink forwarding records to the `log` facade
///
/// Failures log at warn level, passes at debug.
#[derive(Debug, Default)]
pub struct LogReporter;

impl ReportSink for LogReporter {
    fn record(&mut self, record: Record) {
        if record.passed {
            log::debug!(
                "{}: {} satisfies {}",
                record.specification,
                record.entity,
                record.facet
            );
        } else {
            log::warn!(
                "{}: {} fails {}",
                record.specification,
                record.entity,
                record.facet
            );
        }
    }
}

/// Sink that drops every record
#[derive(Debug, Default)]
pub struct DiscardSink;

impl ReportSink for DiscardSink {
    fn record(&mut self, _record: Record) {}
}
