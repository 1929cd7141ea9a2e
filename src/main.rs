//! Workload harness: drives a scheduler with synthetic transfer jobs.
//!
//! Useful for exercising fairness and retry settings end to end: a number of
//! creators each submit a batch of jobs whose payloads sleep for a fixed
//! duration, optionally failing non-fatally on their first run. Jobs that
//! reach the ready state are walked through transferring to done, as an
//! external transfer party would. The diagnostic dashboard can be served
//! alongside.

use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stevedore::config::SchedulerConfig;
use stevedore::dashboard::run_dashboard;
use stevedore::error::JobFailure;
use stevedore::registry::SchedulerRegistry;
use stevedore::scheduler::{Job, JobOutcome, JobSpec, State};
use stevedore::shutdown::install_shutdown_handler;

#[derive(Parser, Debug)]
#[command(name = "stevedore")]
#[command(version)]
#[command(about = "Workload harness for the stevedore scheduling engine")]
struct Args {
    /// Maximum concurrently running jobs
    #[arg(long, default_value = "4")]
    pool_size: usize,

    /// Thread queue capacity
    #[arg(long, default_value = "256")]
    queue_capacity: usize,

    /// Maximum jobs simultaneously ready or transferring
    #[arg(long, default_value = "16")]
    max_ready_jobs: usize,

    /// Number of independent creators submitting jobs
    #[arg(long, default_value = "3")]
    creators: usize,

    /// Jobs submitted by each creator
    #[arg(long, default_value = "12")]
    jobs_per_creator: usize,

    /// How long each job's payload works, in milliseconds
    #[arg(long, default_value = "250")]
    work_ms: u64,

    /// Make every Nth job fail non-fatally on its first run (0 disables)
    #[arg(long, default_value = "0")]
    fail_every: usize,

    /// Delay before a failed job is retried, in milliseconds
    #[arg(long, default_value = "500")]
    retry_delay_ms: u64,

    /// Select jobs in strict submission order instead of fair-share
    #[arg(long)]
    no_fairness: bool,

    /// Serve the diagnostic dashboard on this port
    #[arg(long)]
    dashboard_port: Option<u16>,
}

/// Synthetic payload: sleeps for the configured duration, failing
/// non-fatally while it has failures left to report.
struct SleepJob {
    work: Duration,
    failures: AtomicU32,
}

impl SleepJob {
    fn new(work: Duration, failures: u32) -> Self {
        Self {
            work,
            failures: AtomicU32::new(failures),
        }
    }
}

impl JobSpec for SleepJob {
    fn run(&self) -> Result<JobOutcome, JobFailure> {
        std::thread::sleep(self.work);
        if self.failures.load(Ordering::SeqCst) > 0 {
            self.failures.fetch_sub(1, Ordering::SeqCst);
            return Err(JobFailure::NonFatal("synthetic failure".to_owned()));
        }
        Ok(JobOutcome::Yielded)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("stevedore=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let config = SchedulerConfig::default()
        .with_pool_size(args.pool_size)
        .with_thread_queue_capacity(args.queue_capacity)
        .with_max_ready_jobs(args.max_ready_jobs)
        .with_retry_delay(Duration::from_millis(args.retry_delay_ms))
        .with_wake_interval(Duration::from_millis(500))
        .with_fairness(!args.no_fairness);

    let registry = Arc::new(SchedulerRegistry::new());
    let scheduler = registry.create("transfers", config)?;
    let token = install_shutdown_handler();

    if let Some(port) = args.dashboard_port {
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
        let registry = registry.clone();
        tokio::spawn(async move {
            run_dashboard(addr, registry).await;
        });
    }

    // Submit the workload.
    let work = Duration::from_millis(args.work_ms);
    let mut jobs = Vec::with_capacity(args.creators * args.jobs_per_creator);
    let mut submitted = 0usize;
    for creator in 0..args.creators {
        for index in 0..args.jobs_per_creator {
            let ordinal = creator * args.jobs_per_creator + index;
            let failures = match args.fail_every {
                0 => 0,
                n if ordinal % n == 0 => 1,
                _ => 0,
            };
            let job = Job::new(format!("creator-{creator}"), 3, SleepJob::new(work, failures));
            match scheduler.schedule(&job).await {
                Ok(()) => submitted += 1,
                Err(error) => {
                    tracing::warn!(job_id = %job.id(), %error, "Submission rejected");
                }
            }
            jobs.push(job);
        }
    }
    tracing::info!(submitted, "Workload submitted");

    // Play the external transfer party: walk ready jobs to done.
    let finisher_scheduler = scheduler.clone();
    let finisher_jobs = jobs.clone();
    let finisher_token = token.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_millis(100));
        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = finisher_token.cancelled() => break,
            }
            for job in &finisher_jobs {
                if job.state() == State::Ready {
                    let _ = finisher_scheduler.set_state(job, State::Transferring, "transfer started");
                    let _ = finisher_scheduler.set_state(job, State::Done, "transfer complete");
                }
            }
        }
    });

    // Wait for the workload to finish, or for a shutdown signal.
    let mut ticker = tokio::time::interval(Duration::from_millis(200));
    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = token.cancelled() => {
                tracing::info!("Shutdown requested, abandoning remaining jobs");
                break;
            }
        }
        if jobs.iter().all(|job| job.state().is_terminal()) {
            break;
        }
    }

    let mut outcomes: BTreeMap<String, usize> = BTreeMap::new();
    for job in &jobs {
        *outcomes.entry(job.state().to_string()).or_insert(0) += 1;
    }
    tracing::info!(?outcomes, "Workload finished");
    tracing::info!(info = ?scheduler.info(), "Final scheduler snapshot");

    registry.shutdown_all();
    Ok(())
}
