mod activation;
mod assignment;
mod obstacles;
