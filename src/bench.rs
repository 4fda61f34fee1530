use std::io::{self, Write};
use std::time::{Duration, Instant};

const BAR_WIDTH: u32 = 50;
const REPORT_STEP: u32 = 5;

/// Render one progress line for `progress` percent (clamped to 100).
pub fn render_progress_bar(progress: u32) -> String {
    let progress = progress.min(100);
    let pos = BAR_WIDTH * progress / 100;
    let mut line = String::with_capacity(BAR_WIDTH as usize + 8);
    line.push('[');
    for j in 0..BAR_WIDTH {
        line.push(match j.cmp(&pos) {
            std::cmp::Ordering::Less => '=',
            std::cmp::Ordering::Equal => '>',
            std::cmp::Ordering::Greater => ' ',
        });
    }
    line.push_str(&format!("] {}% ", progress));
    line
}

/// Run `f` `count` times, redrawing the bar on `out`.
///
/// A failed write stops further redraws but not the loop; the first error is
/// returned once all iterations have run.
fn execute_with_progress<F: FnMut()>(
    count: u32,
    mut f: F,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut last_reported = 0u32;
    let mut failure: Option<io::Error> = None;
    for i in 0..count {
        f();

        if failure.is_some() {
            continue;
        }
        let done = i + 1;
        let progress = (u64::from(done) * 100 / u64::from(count)) as u32;
        // Redraw every 5 points and always on the last iteration.
        if progress >= last_reported + REPORT_STEP || done == count {
            let drawn =
                write!(out, "\r{}", render_progress_bar(progress)).and_then(|_| out.flush());
            if let Err(e) = drawn {
                failure = Some(e);
                continue;
            }
            last_reported = progress;
        }
    }
    match failure {
        Some(e) => Err(e),
        None => writeln!(out),
    }
}

/// Run `f` `count` times and return the elapsed wall time.
///
/// With `show_progress` a bar is redrawn on stderr as the loop advances.
pub fn measure_performance<F: FnMut()>(count: u32, mut f: F, show_progress: bool) -> Duration {
    let start = Instant::now();

    if count == 0 {
        return start.elapsed();
    }

    if show_progress {
        if let Err(e) = execute_with_progress(count, f, &mut io::stderr().lock()) {
            log::warn!("Progress bar disabled, stderr write failed: {}", e);
        }
    } else {
        for _ in 0..count {
            f();
        }
    }

    start.elapsed()
}
