use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "rayon")] {
        use rayon::prelude::*;

        /// Maps every item on the rayon pool, keeping the input order.
        pub fn opt_par_map<T, R, F>(items: &[T], f: F) -> Vec<R>
        where
            T: Sync,
            R: Send,
            F: Fn(&T) -> R + Sync + Send,
        {
            items.par_iter().map(f).collect()
        }

    } else {
        pub fn opt_par_map<T, R, F>(items: &[T], f: F) -> Vec<R>
        where
            F: Fn(&T) -> R,
        {
            items.iter().map(f).collect()
        }
    }
}
