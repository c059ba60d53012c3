mod concurrency;
mod headers;
