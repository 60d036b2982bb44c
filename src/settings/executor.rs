//! 有界后台执行器 - 固定工作线程池
//!
//! 设置仓库的后台操作（禁用推送、同步密封发送者状态）在这里执行：
//! 每次提交相互独立、不保证顺序，结果回调在工作线程上恰好调用一次。

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use tracing::debug;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// 有界执行器
pub struct BoundedExecutor {
    sender: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl BoundedExecutor {
    /// 创建指定工作线程数的执行器
    pub fn new(worker_count: usize) -> Self {
        assert!(worker_count > 0);
        let (sender, receiver) = channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..worker_count)
            .map(|index| {
                let receiver = Arc::clone(&receiver);
                thread::Builder::new()
                    .name(format!("settings-worker-{}", index))
                    .spawn(move || Self::worker_loop(index, receiver))
                    .expect("failed to spawn settings worker")
            })
            .collect();

        Self {
            sender: Some(sender),
            workers,
        }
    }

    fn worker_loop(index: usize, receiver: Arc<Mutex<Receiver<Job>>>) {
        debug!(worker = index, "Settings worker started");
        loop {
            let job = {
                let guard = receiver.lock().unwrap();
                guard.recv()
            };
            match job {
                Ok(job) => job(),
                // 发送端关闭，线程退出
                Err(_) => break,
            }
        }
        debug!(worker = index, "Settings worker stopped");
    }

    /// 提交一个后台任务
    pub fn execute<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(sender) = &self.sender {
            // 接收端只在 Drop 后消失
            let _ = sender.send(Box::new(job));
        }
    }
}

impl Drop for BoundedExecutor {
    fn drop(&mut self) {
        // 关闭队列并等待在途任务完成
        self.sender.take();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}
