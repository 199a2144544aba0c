use crate::config::QueuesConfig;

#[derive(Debug, Clone)]
pub enum ConfigOption {
  SetXsBufferSize(usize),
  SetSmallBufferSize(usize),
}

impl ConfigOption {
  pub(crate) fn apply(&self, config: &mut QueuesConfig) {
    match self {
      ConfigOption::SetXsBufferSize(size) => {
        config.set_xs_buffer_size(*size);
      }
      ConfigOption::SetSmallBufferSize(size) => {
        config.set_small_buffer_size(*size);
      }
    }
  }

  pub fn with_xs_buffer_size(size: usize) -> ConfigOption {
    ConfigOption::SetXsBufferSize(size)
  }

  pub fn with_small_buffer_size(size: usize) -> ConfigOption {
    ConfigOption::SetSmallBufferSize(size)
  }
}
