//! Block-streaming MODWT with back-pressure.
//!
//! A [`StreamingModwt`] accumulates pushed samples and emits one
//! single-level coefficient block per `block_size` consumed samples. The
//! accumulator keeps the last `filter_len - 1` consumed samples as causal
//! history, so every block after the first is filtered against the true
//! past and the emitted coefficients agree with the undivided transform.
//! Results queue up until a consumer drains them; when the queue reaches its
//! high-water mark, `push` refuses with [`ModwtError::BackPressure`] until
//! the consumer catches up. Everything runs on the caller's thread; a
//! subscriber is driven in source order from inside `push`/`flush` while it
//! has credit outstanding.

extern crate alloc;
use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::boundary::BoundaryMode;
use crate::transform::{self, ModwtError, ModwtResult};
use crate::wavelet::Wavelet;

#[cfg(feature = "std")]
use std::time::{Duration, Instant};

/// Default cap on undelivered results before `push` starts refusing.
pub const DEFAULT_HIGH_WATER: usize = 16;

/// What `flush` does with a trailing partial block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushPadding {
    /// Pad to a full block with the configured boundary mode. Default.
    Extend,
    /// Emit the remaining samples as a short block.
    Truncate,
}

/// One emitted block of coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockResult {
    pub coeffs: ModwtResult,
    /// Position of this block in the stream, starting at zero.
    pub index: u64,
    /// True only for the final block emitted by a padding flush.
    pub partial: bool,
}

/// Counters maintained by the stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub samples_pushed: u64,
    pub samples_processed: u64,
    pub blocks_emitted: u64,
}

/// Consumer side of the request-N protocol.
///
/// The stream calls `on_block` for each result in source order, but only
/// while the subscriber has credit; both callbacks return additional credit.
/// A subscriber that returns 1 from `on_block` paces the stream to one block
/// at a time.
pub trait BlockSubscriber {
    /// Called once on attachment; returns the initial credit.
    fn on_subscribe(&mut self) -> usize;
    /// Called per block in order; returns additional credit.
    fn on_block(&mut self, block: &BlockResult) -> usize;
    /// Terminal error, including [`ModwtError::Cancelled`].
    fn on_error(&mut self, _error: &ModwtError) {}
    /// Stream closed normally.
    fn on_complete(&mut self) {}
}

/// Ring-buffered streaming front end over the single-level kernel.
pub struct StreamingModwt {
    wavelet: Wavelet,
    mode: BoundaryMode,
    block_size: usize,
    overlap: usize,
    high_water: usize,
    padding: FlushPadding,
    buffer: Vec<f64>,
    history: Vec<f64>,
    queue: VecDeque<BlockResult>,
    subscriber: Option<Box<dyn BlockSubscriber>>,
    credit: usize,
    next_index: u64,
    closed: bool,
    cancelled: bool,
    failed: Option<ModwtError>,
    stats: StreamStats,
    #[cfg(feature = "std")]
    started: Instant,
}

impl core::fmt::Debug for StreamingModwt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StreamingModwt")
            .field("wavelet", &self.wavelet)
            .field("mode", &self.mode)
            .field("block_size", &self.block_size)
            .field("overlap", &self.overlap)
            .field("high_water", &self.high_water)
            .field("padding", &self.padding)
            .field("buffer", &self.buffer)
            .field("history", &self.history)
            .field("queue", &self.queue)
            .field("subscriber", &self.subscriber.as_ref().map(|_| "<subscriber>"))
            .field("credit", &self.credit)
            .field("next_index", &self.next_index)
            .field("closed", &self.closed)
            .field("cancelled", &self.cancelled)
            .field("failed", &self.failed)
            .field("stats", &self.stats)
            .finish()
    }
}

impl StreamingModwt {
    /// Stream with the given block size; must cover the wavelet's filter.
    pub fn new(
        wavelet: Wavelet,
        mode: BoundaryMode,
        block_size: usize,
    ) -> Result<Self, ModwtError> {
        if block_size < wavelet.filter_len() {
            return Err(ModwtError::InvalidBlockSize {
                block: block_size,
                filter: wavelet.filter_len(),
            });
        }
        Ok(StreamingModwt {
            wavelet,
            mode,
            block_size,
            overlap: 0,
            high_water: DEFAULT_HIGH_WATER,
            padding: FlushPadding::Extend,
            buffer: Vec::new(),
            history: Vec::new(),
            queue: VecDeque::new(),
            subscriber: None,
            credit: 0,
            next_index: 0,
            closed: false,
            cancelled: false,
            failed: None,
            stats: StreamStats::default(),
            #[cfg(feature = "std")]
            started: Instant::now(),
        })
    }

    /// Retain the last `overlap` samples of each block for the next one,
    /// for overlap-add consumers. At most half the block size.
    pub fn with_overlap(mut self, overlap: usize) -> Result<Self, ModwtError> {
        let max = self.block_size / 2;
        if overlap > max {
            return Err(ModwtError::InvalidOverlap { overlap, max });
        }
        self.overlap = overlap;
        Ok(self)
    }

    /// Cap on undelivered results before `push` refuses.
    pub fn with_high_water(mut self, high_water: usize) -> Result<Self, ModwtError> {
        if high_water == 0 {
            return Err(ModwtError::InvalidConfig {
                param: "high_water must be at least 1",
            });
        }
        self.high_water = high_water;
        Ok(self)
    }

    /// Partial-block policy used by `flush`.
    pub fn with_flush_padding(mut self, padding: FlushPadding) -> Self {
        self.padding = padding;
        self
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Samples accumulated but not yet consumed into a block.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Results emitted but not yet delivered or popped.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn stats(&self) -> StreamStats {
        self.stats
    }

    /// Consumed samples per wall-clock second since the stream was built.
    #[cfg(feature = "std")]
    pub fn throughput(&self) -> f64 {
        let elapsed = self.started.elapsed().as_secs_f64();
        if elapsed <= 0.0 {
            return 0.0;
        }
        self.stats.samples_processed as f64 / elapsed
    }

    fn ensure_open(&self) -> Result<(), ModwtError> {
        if self.cancelled {
            return Err(ModwtError::Cancelled);
        }
        if self.closed {
            return Err(ModwtError::Closed);
        }
        if let Some(error) = &self.failed {
            return Err(error.clone());
        }
        Ok(())
    }

    fn fail(&mut self, error: ModwtError) {
        self.failed = Some(error.clone());
        if let Some(sub) = self.subscriber.as_mut() {
            sub.on_error(&error);
        }
    }

    /// Append samples; returns how many blocks this call emitted.
    ///
    /// Refuses with [`ModwtError::BackPressure`] while the output queue sits
    /// at its high-water mark; nothing is consumed in that case and the call
    /// can simply be retried after draining. A non-finite sample terminates
    /// the stream.
    pub fn push(&mut self, samples: &[f64]) -> Result<usize, ModwtError> {
        self.ensure_open()?;
        if self.queue.len() >= self.high_water {
            return Err(ModwtError::BackPressure {
                queued: self.queue.len(),
            });
        }
        for (index, &x) in samples.iter().enumerate() {
            if !x.is_finite() {
                let error = ModwtError::NonFiniteSample { index };
                self.fail(error.clone());
                return Err(error);
            }
        }
        self.buffer.extend_from_slice(samples);
        self.stats.samples_pushed += samples.len() as u64;
        #[cfg(feature = "verbose-logging")]
        log::debug!(
            "push: {} samples, {} buffered, {} queued",
            samples.len(),
            self.buffer.len(),
            self.queue.len()
        );
        Ok(self.process_ready())
    }

    fn push_history(&mut self, consumed: &[f64]) {
        let keep = self.wavelet.filter_len() - 1;
        if keep == 0 {
            return;
        }
        self.history.extend_from_slice(consumed);
        let len = self.history.len();
        if len > keep {
            self.history.drain(..len - keep);
        }
    }

    fn process_ready(&mut self) -> usize {
        if self.closed || self.cancelled || self.failed.is_some() {
            return 0;
        }
        let mut emitted = 0;
        while self.buffer.len() >= self.block_size && self.queue.len() < self.high_water {
            let block: Vec<f64> = self.buffer[..self.block_size].to_vec();
            let coeffs = match transform::forward_with_history(
                &block,
                &self.history,
                &self.wavelet,
                self.mode,
            ) {
                Ok(coeffs) => coeffs,
                Err(error) => {
                    self.fail(error);
                    return emitted;
                }
            };
            let consume = self.block_size - self.overlap;
            let consumed: Vec<f64> = self.buffer.drain(..consume).collect();
            self.push_history(&consumed);
            self.stats.samples_processed += consume as u64;
            self.stats.blocks_emitted += 1;
            self.queue.push_back(BlockResult {
                coeffs,
                index: self.next_index,
                partial: false,
            });
            self.next_index += 1;
            emitted += 1;
            self.deliver();
        }
        emitted
    }

    fn deliver(&mut self) {
        let Some(sub) = self.subscriber.as_mut() else {
            return;
        };
        while self.credit > 0 {
            let Some(block) = self.queue.pop_front() else {
                break;
            };
            self.credit -= 1;
            self.credit = self.credit.saturating_add(sub.on_block(&block));
        }
    }

    /// Attach the consumer; its initial credit starts delivery immediately.
    pub fn subscribe(&mut self, mut subscriber: Box<dyn BlockSubscriber>) {
        self.credit = self.credit.saturating_add(subscriber.on_subscribe());
        self.subscriber = Some(subscriber);
        self.deliver();
        let _ = self.process_ready();
    }

    /// Grant additional delivery credit from outside the subscriber.
    pub fn request(&mut self, additional: usize) {
        self.credit = self.credit.saturating_add(additional);
        self.deliver();
        let _ = self.process_ready();
    }

    /// Pull the oldest undelivered result, releasing back-pressure.
    pub fn pop_result(&mut self) -> Option<BlockResult> {
        let out = self.queue.pop_front();
        if out.is_some() {
            let _ = self.process_ready();
        }
        out
    }

    /// Emit any trailing partial block per the configured padding policy.
    ///
    /// Returns the number of blocks emitted. With a saturated queue the
    /// stream stays drainable and the call reports
    /// [`ModwtError::BackPressure`].
    pub fn flush(&mut self) -> Result<usize, ModwtError> {
        self.flush_inner(false)
    }

    /// Like [`StreamingModwt::flush`], reporting [`ModwtError::Timeout`]
    /// when the queue cannot accept the final block before the deadline.
    #[cfg(feature = "std")]
    pub fn flush_timeout(&mut self, deadline: Duration) -> Result<usize, ModwtError> {
        let start = Instant::now();
        loop {
            match self.flush_inner(true) {
                Err(ModwtError::Timeout) if start.elapsed() < deadline => {
                    // single-threaded stream: the queue can only drain
                    // through the subscriber, so try delivery once more
                    self.deliver();
                    if self.queue.len() >= self.high_water {
                        return Err(ModwtError::Timeout);
                    }
                }
                other => return other,
            }
        }
    }

    fn flush_inner(&mut self, deadline: bool) -> Result<usize, ModwtError> {
        self.ensure_open()?;
        let mut emitted = self.process_ready();
        if self.buffer.is_empty() {
            return Ok(emitted);
        }
        if self.queue.len() >= self.high_water {
            return Err(if deadline {
                ModwtError::Timeout
            } else {
                ModwtError::BackPressure {
                    queued: self.queue.len(),
                }
            });
        }
        if self.buffer.len() >= self.block_size {
            // queue freed up mid-flush; finish the full blocks first
            emitted += self.process_ready();
            if self.buffer.len() >= self.block_size {
                return Err(if deadline {
                    ModwtError::Timeout
                } else {
                    ModwtError::BackPressure {
                        queued: self.queue.len(),
                    }
                });
            }
        }
        if self.buffer.is_empty() {
            return Ok(emitted);
        }
        let remainder: Vec<f64> = core::mem::take(&mut self.buffer);
        let block = match self.padding {
            FlushPadding::Extend => {
                let m = remainder.len();
                let mut padded = Vec::with_capacity(self.block_size);
                padded.extend_from_slice(&remainder);
                for i in m..self.block_size {
                    match self.mode.resolve(i as isize, m) {
                        Some(src) => padded.push(remainder[src]),
                        None => padded.push(0.0),
                    }
                }
                padded
            }
            FlushPadding::Truncate => remainder.clone(),
        };
        let coeffs =
            match transform::forward_with_history(&block, &self.history, &self.wavelet, self.mode)
            {
                Ok(coeffs) => coeffs,
                Err(error) => {
                    self.fail(error.clone());
                    return Err(error);
                }
            };
        self.push_history(&remainder);
        self.stats.samples_processed += remainder.len() as u64;
        self.stats.blocks_emitted += 1;
        self.queue.push_back(BlockResult {
            coeffs,
            index: self.next_index,
            partial: true,
        });
        self.next_index += 1;
        #[cfg(feature = "verbose-logging")]
        log::debug!("flush: emitted partial block {}", self.next_index - 1);
        self.deliver();
        Ok(emitted + 1)
    }

    /// Complete the stream. Queued results stay drainable; further pushes
    /// fail with [`ModwtError::Closed`].
    pub fn close(&mut self) {
        if self.closed || self.cancelled {
            return;
        }
        let _ = self.process_ready();
        self.deliver();
        self.closed = true;
        if let Some(sub) = self.subscriber.as_mut() {
            sub.on_complete();
        }
    }

    /// Abort: discard buffered samples and undelivered results, and signal
    /// [`ModwtError::Cancelled`] to the subscriber.
    pub fn cancel(&mut self) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;
        self.queue.clear();
        self.buffer.clear();
        self.history.clear();
        if let Some(sub) = self.subscriber.as_mut() {
            sub.on_error(&ModwtError::Cancelled);
        }
    }
}
