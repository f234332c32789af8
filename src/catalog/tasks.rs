//! Background task tokens as reported by the task backend.
//!
//! `TaskType` and `TransferType` overlap: every transfer type has a task type
//! with the same token, while `DeleteChannel` has no transfer counterpart.
//! Both catalogs are kept because different consumers match on each.

catalog! {
    /// Categories of background transfer and removal jobs.
    ///
    TaskType("TaskTypes") {
        RemoteImport => "REMOTE_IMPORT",
        LocalImport => "LOCAL_IMPORT",
        LocalExport => "LOCAL_EXPORT",
        DeleteChannel => "DELETE_CHANNEL",
    }
}

catalog! {
    /// Lifecycle states of a background job.
    ///
    /// This is a flat set. Valid transitions are decided by the task poller.
    TaskStatus("TaskStatuses") {
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Failed => "FAILED",
        Pending => "PENDING",
        Running => "RUNNING",
        Queued => "QUEUED",
        Scheduled => "SCHEDULED",
    }
}

catalog! {
    /// Direction of a content transfer.
    ///
    TransferType("TransferTypes") {
        LocalImport => "LOCAL_IMPORT",
        RemoteImport => "REMOTE_IMPORT",
        LocalExport => "LOCAL_EXPORT",
    }
}

impl TaskType {
    /// Returns the transfer direction of this task, if it moves content.
    ///
    pub fn transfer_type(&self) -> Option<TransferType> {
        match self {
            TaskType::RemoteImport => Some(TransferType::RemoteImport),
            TaskType::LocalImport => Some(TransferType::LocalImport),
            TaskType::LocalExport => Some(TransferType::LocalExport),
            TaskType::DeleteChannel => None,
        }
    }
}

impl From<TransferType> for TaskType {
    fn from(transfer: TransferType) -> Self {
        match transfer {
            TransferType::LocalImport => TaskType::LocalImport,
            TransferType::RemoteImport => TaskType::RemoteImport,
            TransferType::LocalExport => TaskType::LocalExport,
        }
    }
}
