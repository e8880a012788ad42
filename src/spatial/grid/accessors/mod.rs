mod buffers;
mod cell;
mod motion;
