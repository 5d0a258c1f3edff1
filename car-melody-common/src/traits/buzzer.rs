/// 蜂鸣器音调驱动
///
/// 所有方法都必须立即返回，不能阻塞等待音符结束。
pub trait ToneDriver {
    type Error;

    /// 以给定频率发声，最长持续 `duration_ms` 毫秒；正在发声时重新开始
    fn emit(&mut self, frequency_hz: u32, duration_ms: u32) -> Result<(), Self::Error>;

    /// 立即停止发声
    fn silence(&mut self) -> Result<(), Self::Error>;

    /// 将输出引脚置为确定的空闲电平（低电平）
    fn set_idle_state(&mut self) -> Result<(), Self::Error>;
}
