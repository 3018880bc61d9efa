// Joseph Prichard
// 4/25/2024
// Threading operations

use std::io;
use std::path::PathBuf;
use std::thread::available_parallelism;
use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::info;

// an input file and where its output is written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

pub fn configure_thread_pool(multithreaded: bool, file_count: usize) -> io::Result<ThreadPool> {
    // configure the rayon thread pool based on --mt flag
    let threads = if multithreaded {
        file_count.min(available_parallelism()?.get()).max(1)
    } else {
        1
    };

    info!("Running with {} threads", threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

// runs each job on the pool, every job is independent and results keep the job order
pub fn run_jobs<T, F>(pool: &ThreadPool, jobs: &[FileJob], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&FileJob) -> T + Sync,
{
    pool.install(|| jobs.par_iter().map(|job| f(job)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs(count: usize) -> Vec<FileJob> {
        (0..count)
            .map(|i| FileJob { input: PathBuf::from(format!("in{}", i)), output: PathBuf::from(format!("out{}", i)) })
            .collect()
    }

    #[test]
    fn test_single_threaded_pool() {
        let pool = configure_thread_pool(false, 8).unwrap();
        assert_eq!(pool.current_num_threads(), 1);
    }

    #[test]
    fn test_multithreaded_pool_bounded_by_files() {
        let pool = configure_thread_pool(true, 1).unwrap();
        assert_eq!(pool.current_num_threads(), 1);
        let pool = configure_thread_pool(true, 0).unwrap();
        assert_eq!(pool.current_num_threads(), 1);
    }

    #[test]
    fn test_run_jobs_keeps_order() {
        let pool = configure_thread_pool(true, 4).unwrap();
        let jobs = jobs(20);
        let outputs = run_jobs(&pool, &jobs, |job| job.output.clone());
        let expected: Vec<PathBuf> = jobs.iter().map(|job| job.output.clone()).collect();
        assert_eq!(outputs, expected);
    }
}
