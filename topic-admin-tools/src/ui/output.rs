// Copyright 2024 The Topic Admin Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Colored status lines for command output

use colored::Colorize;

use crate::core::report::OperationReport;

pub fn print_success(message: &str) {
    println!("{} {}", "[OK]".green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "[INFO]".blue().bold(), message);
}

/// Print section header
pub fn print_header(title: &str) {
    println!("\n{}", title.cyan().bold().underline());
}

/// Format count with proper pluralization
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

pub fn print_empty_result(entity: &str) {
    print_info(&format!("No {entity} found"));
}

pub fn print_operation_start(operation: &str) {
    println!("{} {}...", "▶".blue().bold(), operation);
}

/// One line per failed item, then the counts.
pub fn print_report_summary(report: &OperationReport) {
    for (item, error) in report.failures() {
        let topic = item.topic.as_deref().unwrap_or(item.pattern.as_str());
        print_error(&format!("{topic}: {error}"));
    }

    let summary = format!("{} on namespace '{}'", report.summary(), report.namespace);
    if report.is_success() {
        print_success(&summary);
    } else {
        print_error(&summary);
    }
}
