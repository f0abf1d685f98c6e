//! # Receipt Printer Abstraction
//!
//! Printing is the one side effect [`crate::Register::place_order`] performs
//! beyond persistence, so it sits behind a trait. The register treats the
//! printer as best-effort: a jammed printer never voids a placed order.

use std::io::Write;

use tracing::debug;

use bliss_core::ReceiptDocument;

/// Destination for rendered receipts.
pub trait ReceiptPrinter {
    /// Prints one receipt document.
    fn print(&mut self, doc: &ReceiptDocument) -> std::io::Result<()>;
}

// =============================================================================
// Shipped Printers
// =============================================================================

/// Writes receipts to stdout, standing in for counter hardware.
#[derive(Debug, Default)]
pub struct LogPrinter;

impl ReceiptPrinter for LogPrinter {
    fn print(&mut self, doc: &ReceiptDocument) -> std::io::Result<()> {
        debug!(order_id = %doc.order_id, "printing receipt");
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(doc.body.as_bytes())?;
        out.flush()
    }
}

/// Discards receipts. For headless sessions and benchmarks.
#[derive(Debug, Default)]
pub struct NullPrinter;

impl ReceiptPrinter for NullPrinter {
    fn print(&mut self, _doc: &ReceiptDocument) -> std::io::Result<()> {
        Ok(())
    }
}

/// Captures printed receipts in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct MemoryPrinter {
    printed: Vec<ReceiptDocument>,
}

impl MemoryPrinter {
    /// Creates an empty printer.
    pub fn new() -> Self {
        MemoryPrinter::default()
    }

    /// Every document printed so far, oldest first.
    pub fn printed(&self) -> &[ReceiptDocument] {
        &self.printed
    }
}

impl ReceiptPrinter for MemoryPrinter {
    fn print(&mut self, doc: &ReceiptDocument) -> std::io::Result<()> {
        self.printed.push(doc.clone());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
