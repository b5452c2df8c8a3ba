//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int4,
        /// Task title, at most 100 characters.
        #[max_length = 100]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Creation timestamp.
        creation_date -> Timestamptz,
        /// Completion timestamp, set while the task is completed.
        completion_date -> Nullable<Timestamptz>,
        /// Symbolic task status name.
        #[max_length = 20]
        status -> Varchar,
    }
}
